use crate::graphql::resolvers::Query;
use crate::source::CatalogSource;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub catalog: Arc<dyn CatalogSource>,
    pub default_page_size: usize,
}

/// The complete GraphQL schema. The catalog is read-only, so there are no
/// mutations or subscriptions.
pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema over the given catalog source
pub fn create_schema(catalog: Arc<dyn CatalogSource>, default_page_size: usize) -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(GraphQLContext {
            catalog,
            default_page_size,
        })
        .finish()
}
