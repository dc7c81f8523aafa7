/// User agent sent by the test Aladhan client.
pub static TEST_USER_AGENT: &str = "ramadan-tracker-tests/1.0";
