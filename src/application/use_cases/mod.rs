/// Use cases module containing application business logic orchestration
mod load_hideout;

pub use load_hideout::LoadHideoutUseCase;
