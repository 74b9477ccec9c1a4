use crate::{Ingredient, SupplyChain, SupplyChainClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};

pub struct TestContext {
    pub env: Env,
    pub client: SupplyChainClient<'static>,
    pub admin: Address,
    pub manufacturer: Address,
    pub distributor: Address,
    pub pharmacy: Address,
    pub patient: Address,
    pub stranger: Address,
}

impl TestContext {
    /// Registered and initialized contract, no roles granted yet.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let contract_id = env.register(SupplyChain, ());
        let client = SupplyChainClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize(&admin);

        TestContext {
            manufacturer: Address::generate(&env),
            distributor: Address::generate(&env),
            pharmacy: Address::generate(&env),
            patient: Address::generate(&env),
            stranger: Address::generate(&env),
            admin,
            client,
            env,
        }
    }

    /// Initialized contract with one participant per role.
    pub fn with_roles() -> Self {
        let ctx = Self::new();
        ctx.client.add_manufacturer(&ctx.admin, &ctx.manufacturer);
        ctx.client.add_distributor(&ctx.admin, &ctx.distributor);
        ctx.client.add_pharmacy(&ctx.admin, &ctx.pharmacy);
        ctx.client.add_patient(&ctx.admin, &ctx.patient);
        ctx
    }

    pub fn new_patient(&self) -> Address {
        let patient = Address::generate(&self.env);
        self.client.add_patient(&self.admin, &patient);
        patient
    }

    pub fn create_drug(&self, quantity: u32) -> u64 {
        self.client
            .create_drug(&self.manufacturer, &String::from_str(&self.env, "drug1"), &quantity)
    }

    /// Creates, ships and receives a batch so it is ready for sale.
    pub fn received_drug(&self, quantity: u32) -> u64 {
        let id = self.create_drug(quantity);
        self.client.ship_drug(&self.distributor, &id);
        self.client.receive_drug(&self.pharmacy, &id);
        id
    }

    pub fn ingredients(&self, parts: &[(&str, u32)]) -> Vec<Ingredient> {
        let mut ingredients = Vec::new(&self.env);
        for (name, composition) in parts {
            ingredients.push_back(Ingredient {
                name: String::from_str(&self.env, name),
                composition: *composition,
            });
        }
        ingredients
    }
}
