pub mod clock;
pub mod fetcher;
pub mod interpreter;
pub mod poller;
pub mod validator;
