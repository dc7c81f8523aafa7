use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    AladhanError(#[from] aladhan::Error),
    #[error(transparent)]
    QuranError(#[from] alquran::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
