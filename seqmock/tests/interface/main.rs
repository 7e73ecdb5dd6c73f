mod dispatch_trait;
mod factory;
mod iterate;
mod scenarios;
