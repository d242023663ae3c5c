use crate::catalog::{self, FilterCriteria, PriceBracket, SortKey};
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::Item;
use async_graphql::{Context, FieldResult, Object, ID};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Get a catalog item by ID
    async fn item(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Item>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.catalog.item_by_id(&id).await {
            Ok(item) => Ok(item.map(|i| i.into())),
            Err(e) => Err(e.into()),
        }
    }

    /// Filtered, sorted, paginated listing view. All arguments optional;
    /// with none supplied this returns the first page in popularity order.
    #[allow(clippy::too_many_arguments)]
    async fn items(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        category: Option<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        sort: Option<SortKey>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> FieldResult<Vec<Item>> {
        let context = ctx.data::<GraphQLContext>()?;

        let mut criteria = FilterCriteria::default()
            .with_price(PriceBracket::from_bounds(min_price, max_price))
            .with_sort(sort.unwrap_or(SortKey::PopularityDesc));
        if let Some(search) = search {
            criteria = criteria.with_search(search);
        }
        if let Some(category) = category {
            criteria = criteria.with_category(category);
        }

        let limit = limit
            .map(|l| l.max(0) as usize)
            .unwrap_or(context.default_page_size);
        let offset = offset.map(|o| o.max(0) as usize);

        match context.catalog.all_items().await {
            Ok(items) => {
                let page = catalog::view_page(&items, &criteria, Some(limit), offset);
                Ok(page.into_iter().map(|i| i.into()).collect())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Distinct category tags for the filter chips
    async fn categories(&self, ctx: &Context<'_>) -> FieldResult<Vec<String>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.catalog.categories().await {
            Ok(categories) => Ok(categories),
            Err(e) => Err(e.into()),
        }
    }
}
