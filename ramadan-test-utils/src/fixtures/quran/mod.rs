use crate::TestContext;

pub mod data;
pub mod mockito;

impl TestContext {
    pub fn quran<'a>(&'a mut self) -> QuranFixtures<'a> {
        QuranFixtures { setup: self }
    }
}

pub struct QuranFixtures<'a> {
    pub setup: &'a mut TestContext,
}
