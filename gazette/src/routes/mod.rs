pub mod default_route;
pub mod replay_route;
