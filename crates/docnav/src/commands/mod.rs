//! CLI command implementations.

pub(crate) mod common;
pub(crate) mod nav;
pub(crate) mod resolve;
pub(crate) mod routes;
pub(crate) mod sections;

pub(crate) use common::CommonArgs;
pub(crate) use nav::NavArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use sections::SectionsArgs;
