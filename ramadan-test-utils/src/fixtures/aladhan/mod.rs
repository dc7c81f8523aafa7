use crate::TestContext;

pub mod data;
pub mod mockito;

impl TestContext {
    pub fn aladhan<'a>(&'a mut self) -> AladhanFixtures<'a> {
        AladhanFixtures { setup: self }
    }
}

pub struct AladhanFixtures<'a> {
    pub setup: &'a mut TestContext,
}
