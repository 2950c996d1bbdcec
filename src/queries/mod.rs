//! Query catalog for the Nexar supply API.
//!
//! Each entry pairs a fixed GraphQL document with the variable map it
//! declares, packaged as a [`QueryRequest`] ready for
//! [`GraphqlClient::execute`](crate::clients::GraphqlClient). Documents are
//! plain string constants; there is no document builder or codegen.
//!
//! The SDK does not validate documents against the upstream schema, and it
//! does not inspect result shapes — both are the server's and the caller's
//! concerns respectively.

use serde_json::{json, Value};

/// A GraphQL document plus the variables to send with it.
///
/// Transient: produced by a catalog function, consumed once by the client,
/// then discarded. Empty variables serialize as `{}` on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequest {
    /// The GraphQL document text.
    pub document: &'static str,
    /// The variables object for the document, `{}` when none are declared.
    pub variables: Value,
}

impl QueryRequest {
    /// Creates a request for a document that declares no parameters.
    #[must_use]
    pub fn new(document: &'static str) -> Self {
        Self {
            document,
            variables: Value::Object(serde_json::Map::new()),
        }
    }

    /// Creates a request with an explicit variables object.
    #[must_use]
    pub const fn with_variables(document: &'static str, variables: Value) -> Self {
        Self {
            document,
            variables,
        }
    }
}

const LIST_ATTRIBUTES: &str = "\
query ListAttributes {
    supAttributes {
        id
        name
        shortname
        group
        unitsName
        unitsSymbol
    }
}";

const LIST_MANUFACTURERS: &str = "\
query ListManufacturers {
    supManufacturers {
        id
        name
        slug
        isDistributorApi
        isVerified
        aliases
        displayFlag
        homepageUrl
    }
}";

const MANUFACTURERS_BY_IDS: &str = "\
query ManufacturersByIDs ($manufacturerIDs: [String!]) {
    supManufacturers (ids: $manufacturerIDs) {
        id
        name
        slug
        isDistributorApi
        isVerified
        aliases
        displayFlag
        homepageUrl
    }
}";

const LIST_DISTRIBUTORS: &str = "\
query ListDistributors {
    supSellers {
        id
        name
        slug
        isDistributorApi
        isVerified
        aliases
        displayFlag
        homepageUrl
    }
}";

const DISTRIBUTORS_BY_IDS: &str = "\
query DistributorsByIDs ($distributorIDs: [String!]) {
    supSellers (ids: $distributorIDs) {
        id
        name
        slug
        isDistributorApi
        isVerified
        aliases
        displayFlag
        homepageUrl
    }
}";

const LIST_CATEGORIES: &str = "\
query ListCategories {
    supCategories {
        id
        name
        parentId
        path
        numParts
    }
}";

const CATEGORIES_BY_IDS: &str = "\
query CategoriesByIDs ($categoryIDs: [String!]) {
    supCategories (ids: $categoryIDs) {
        id
        name
        parentId
        path
        numParts
    }
}";

const CATEGORIES_BY_PATHS: &str = "\
query CategoriesByPaths ($categoryPaths: [String!]) {
    supCategories (paths: $categoryPaths) {
        id
        name
        parentId
        path
        numParts
    }
}";

const BASIC_SEARCH: &str = "\
query BasicSearch ($searchTerm: String!, $limit: Int, $start: Int) {
    supSearch (q: $searchTerm, limit: $limit, start: $start) {
        hits
        results {
            part {
                id
                name
                mpn
                shortDescription
                manufacturer {
                    name
                }
            }
        }
    }
}";

const BASIC_MPN_SEARCH: &str = "\
query BasicMPNSearch ($searchTerm: String!, $limit: Int, $start: Int) {
    supSearchMpn (q: $searchTerm, limit: $limit, start: $start) {
        hits
        results {
            part {
                id
                name
                mpn
                shortDescription
                manufacturer {
                    name
                }
            }
        }
    }
}";

const SEARCH_SUGGESTIONS: &str = "\
query SearchSuggestions ($searchTerm: String!) {
    supSuggest (q: $searchTerm) {
        text
        inCategoryId
        inCategoryName
    }
}";

const PART_SUGGESTIONS_BY_CATEGORY: &str = "\
query PartSearchSuggestionsByCategory ($searchTerm: String!, $categoryID: String) {
    supSuggest (q: $searchTerm, partNumbersOnly: true, categoryId: $categoryID) {
        text
        inCategoryId
        inCategoryName
    }
}";

const BASIC_AGGREGATIONS: &str = "\
query BasicAggregations ($searchTerm: String!) {
    supSearch (q: $searchTerm) {
        categoryAgg {
            category {
                name
            }
            count
        }
        manufacturerAgg {
            company {
                name
            }
            count
        }
        distributorAgg {
            company {
                name
            }
            count
        }
        suggestedCategories {
            category {
                name
            }
            count
        }
        suggestedFilters {
            id
            name
            shortname
        }
    }
}";

const AGGREGATIONS_FOR_SPECS: &str = "\
query AggregationsForSpecs ($searchTerm: String!, $attributes: [String!]!) {
    supSearch (q: $searchTerm) {
        specAggs (attributeNames: $attributes) {
            attribute {
                name
            }
            buckets {
                displayValue
                count
            }
            displayMin
            displayMax
        }
    }
}";

const SPELLING_CORRECTION: &str = "\
query SpellingCorrection ($searchTerm: String!) {
    supSpellingCorrection (q: $searchTerm) {
        correctionString
        hits
    }
}";

const FILTERED_MPN_SEARCH: &str = "\
query FilteredMPNSearch ($searchTerm: String!, $limit: Int, $filters: Map) {
    supSearchMpn (q: $searchTerm, limit: $limit, filters: $filters) {
        hits
        results {
            part {
                id
                name
                mpn
                shortDescription
                category {
                    id
                    name
                }
                manufacturer {
                    name
                }
                sellers {
                    company {
                        name
                    }
                }
            }
        }
    }
}";

const PART_SPECS: &str = "\
query PartSpecs ($searchTerm: String!, $limit: Int) {
    supSearchMpn (q: $searchTerm, limit: $limit) {
        hits
        results {
            part {
                id
                name
                mpn
                specs {
                    attribute {
                        name
                        shortname
                    }
                    displayValue
                }
            }
        }
    }
}";

const SORTING_BY_SPEC: &str = "\
query SortingBySpec ($searchTerm: String!, $limit: Int, $sortBy: String, $sortDir: SupSortDirection) {
    supSearchMpn (q: $searchTerm, limit: $limit, sort: $sortBy, sortDir: $sortDir) {
        hits
        results {
            part {
                id
                name
                mpn
                specs {
                    attribute {
                        name
                        shortname
                    }
                    displayValue
                }
            }
        }
    }
}";

const PART_OFFERS: &str = "\
query PartOffers ($searchTerm: String!, $limit: Int, $inStockOnly: Boolean, $countryCode: String, $currencyCode: String) {
    supSearchMpn (q: $searchTerm, limit: $limit, inStockOnly: $inStockOnly, country: $countryCode, currency: $currencyCode) {
        hits
        results {
            part {
                id
                name
                mpn
                sellers {
                    company {
                        name
                    }
                    offers {
                        id
                        moq
                        packaging
                        clickUrl
                        prices {
                            quantity
                            price
                            currency
                            convertedPrice
                            convertedCurrency
                        }
                    }
                }
            }
        }
    }
}";

const MPN_SEARCH: &str = "\
query MPNSearch ($searchTerm: String!, $country: String!, $currency: String!, $filters: Map, $inStockOnly: Boolean, $limit: Int, $start: Int) {
    supSearchMpn (q: $searchTerm, country: $country, currency: $currency, filters: $filters, inStockOnly: $inStockOnly, limit: $limit, start: $start) {
        hits
        categoryAgg {
            category {
                id
                name
            }
            count
        }
        manufacturerAgg {
            company {
                id
                name
            }
            count
        }
        distributorAgg {
            company {
                id
                name
                displayFlag
            }
            count
        }
        results {
            part {
                id
                name
                mpn
                shortDescription
                manufacturer {
                    name
                    displayFlag
                }
                medianPrice1000 {
                    quantity
                    currency
                    price
                    conversionRate
                    convertedCurrency
                    convertedPrice
                }
                bestDatasheet {
                    name
                    creditString
                    creditUrl
                    url
                }
                manufacturerUrl
                cad {
                    has3dModel
                }
                specs {
                    attribute {
                        id
                        name
                        shortname
                    }
                    displayValue
                }
                sellers {
                    company {
                        id
                        name
                        homepageUrl
                    }
                    isAuthorized
                    offers {
                        id
                        sku
                        inventoryLevel
                        clickUrl
                        moq
                        packaging
                        updated
                        prices {
                            quantity
                            currency
                            price
                            conversionRate
                            convertedCurrency
                            convertedPrice
                        }
                    }
                }
            }
        }
    }
}";

const MULTI_MPN_SEARCH: &str = "\
query MultiMPNSearch ($country: String!, $currency: String!, $requireStockAvailable: Boolean, $filters: Map, $queries: [SupPartMatchQuery!]!) {
    supMultiMatch (country: $country, currency: $currency, options: { requireStockAvailable: $requireStockAvailable, filters: $filters }, queries: $queries) {
        hits
        parts {
            id
            name
            mpn
            shortDescription
            manufacturer {
                name
            }
            specs {
                attribute {
                    id
                    name
                    shortname
                }
                displayValue
            }
            sellers {
                company {
                    id
                    name
                }
                isAuthorized
                offers {
                    id
                    sku
                    inventoryLevel
                    clickUrl
                    moq
                    packaging
                    updated
                    prices {
                        quantity
                        currency
                        price
                        convertedCurrency
                        convertedPrice
                    }
                }
            }
        }
    }
}";

/// Lists all part attributes.
#[must_use]
pub fn list_attributes() -> QueryRequest {
    QueryRequest::new(LIST_ATTRIBUTES)
}

/// Lists all manufacturers.
#[must_use]
pub fn list_manufacturers() -> QueryRequest {
    QueryRequest::new(LIST_MANUFACTURERS)
}

/// Looks up manufacturers by their ids.
#[must_use]
pub fn manufacturers_by_ids(ids: &[&str]) -> QueryRequest {
    QueryRequest::with_variables(MANUFACTURERS_BY_IDS, json!({ "manufacturerIDs": ids }))
}

/// Lists all distributors.
#[must_use]
pub fn list_distributors() -> QueryRequest {
    QueryRequest::new(LIST_DISTRIBUTORS)
}

/// Looks up distributors by their ids.
#[must_use]
pub fn distributors_by_ids(ids: &[&str]) -> QueryRequest {
    QueryRequest::with_variables(DISTRIBUTORS_BY_IDS, json!({ "distributorIDs": ids }))
}

/// Lists all part categories.
#[must_use]
pub fn list_categories() -> QueryRequest {
    QueryRequest::new(LIST_CATEGORIES)
}

/// Looks up categories by their ids.
#[must_use]
pub fn categories_by_ids(ids: &[&str]) -> QueryRequest {
    QueryRequest::with_variables(CATEGORIES_BY_IDS, json!({ "categoryIDs": ids }))
}

/// Looks up categories by their paths.
#[must_use]
pub fn categories_by_paths(paths: &[&str]) -> QueryRequest {
    QueryRequest::with_variables(CATEGORIES_BY_PATHS, json!({ "categoryPaths": paths }))
}

/// Free-text part search with paging.
#[must_use]
pub fn basic_search(term: &str, limit: i32, start: Option<i32>) -> QueryRequest {
    QueryRequest::with_variables(
        BASIC_SEARCH,
        json!({ "searchTerm": term, "limit": limit, "start": start }),
    )
}

/// Manufacturer-part-number search with paging.
#[must_use]
pub fn basic_mpn_search(term: &str, limit: i32, start: Option<i32>) -> QueryRequest {
    QueryRequest::with_variables(
        BASIC_MPN_SEARCH,
        json!({ "searchTerm": term, "limit": limit, "start": start }),
    )
}

/// Search-box suggestions for a term.
#[must_use]
pub fn search_suggestions(term: &str) -> QueryRequest {
    QueryRequest::with_variables(SEARCH_SUGGESTIONS, json!({ "searchTerm": term }))
}

/// Part-number suggestions restricted to one category.
#[must_use]
pub fn part_suggestions_by_category(term: &str, category_id: &str) -> QueryRequest {
    QueryRequest::with_variables(
        PART_SUGGESTIONS_BY_CATEGORY,
        json!({ "searchTerm": term, "categoryID": category_id }),
    )
}

/// Category/manufacturer/distributor aggregations for a term.
#[must_use]
pub fn basic_aggregations(term: &str) -> QueryRequest {
    QueryRequest::with_variables(BASIC_AGGREGATIONS, json!({ "searchTerm": term }))
}

/// Spec-bucket aggregations for the named attributes.
#[must_use]
pub fn aggregations_for_specs(term: &str, attributes: &[&str]) -> QueryRequest {
    QueryRequest::with_variables(
        AGGREGATIONS_FOR_SPECS,
        json!({ "searchTerm": term, "attributes": attributes }),
    )
}

/// Spelling correction for a search term.
#[must_use]
pub fn spelling_correction(term: &str) -> QueryRequest {
    QueryRequest::with_variables(SPELLING_CORRECTION, json!({ "searchTerm": term }))
}

/// MPN search narrowed by a filters map (manufacturer, distributor,
/// category, or tech-spec filters all use the same `Map` argument).
#[must_use]
pub fn filtered_mpn_search(term: &str, limit: i32, filters: Value) -> QueryRequest {
    QueryRequest::with_variables(
        FILTERED_MPN_SEARCH,
        json!({ "searchTerm": term, "limit": limit, "filters": filters }),
    )
}

/// Technical specs for parts matching a term.
#[must_use]
pub fn part_specs(term: &str, limit: i32) -> QueryRequest {
    QueryRequest::with_variables(PART_SPECS, json!({ "searchTerm": term, "limit": limit }))
}

/// MPN search sorted by a spec attribute.
#[must_use]
pub fn sorting_by_spec(term: &str, limit: i32, sort_by: &str, sort_dir: &str) -> QueryRequest {
    QueryRequest::with_variables(
        SORTING_BY_SPEC,
        json!({ "searchTerm": term, "limit": limit, "sortBy": sort_by, "sortDir": sort_dir }),
    )
}

/// Seller offers and pricing for parts matching a term, optionally localized
/// to a country and currency.
#[must_use]
pub fn part_offers(
    term: &str,
    limit: i32,
    in_stock_only: bool,
    country: Option<&str>,
    currency: Option<&str>,
) -> QueryRequest {
    QueryRequest::with_variables(
        PART_OFFERS,
        json!({
            "searchTerm": term,
            "limit": limit,
            "inStockOnly": in_stock_only,
            "countryCode": country,
            "currencyCode": currency,
        }),
    )
}

/// Full MPN search: aggregations, specs, datasheets, sellers, and localized
/// pricing in one document.
#[must_use]
pub fn mpn_search(
    term: &str,
    country: &str,
    currency: &str,
    filters: Option<Value>,
    in_stock_only: bool,
    limit: i32,
    start: Option<i32>,
) -> QueryRequest {
    QueryRequest::with_variables(
        MPN_SEARCH,
        json!({
            "searchTerm": term,
            "country": country,
            "currency": currency,
            "filters": filters,
            "inStockOnly": in_stock_only,
            "limit": limit,
            "start": start,
        }),
    )
}

/// Matches a batch of part queries in one round trip.
///
/// Each entry of `queries` is a `SupPartMatchQuery` input object, e.g.
/// `json!({ "mpn": "NE555", "limit": 1 })`.
#[must_use]
pub fn multi_mpn_search(
    country: &str,
    currency: &str,
    require_stock_available: bool,
    filters: Option<Value>,
    queries: Value,
) -> QueryRequest {
    QueryRequest::with_variables(
        MULTI_MPN_SEARCH,
        json!({
            "country": country,
            "currency": currency,
            "requireStockAvailable": require_stock_available,
            "filters": filters,
            "queries": queries,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterless_documents_get_empty_object_variables() {
        for request in [
            list_attributes(),
            list_manufacturers(),
            list_distributors(),
            list_categories(),
        ] {
            assert_eq!(request.variables, json!({}));
            assert!(!request.variables.is_null());
        }
    }

    #[test]
    fn test_id_lookups_bind_declared_variable_names() {
        let request = manufacturers_by_ids(&["123", "456"]);
        assert_eq!(request.variables, json!({ "manufacturerIDs": ["123", "456"] }));
        assert!(request.document.contains("$manufacturerIDs"));

        let request = distributors_by_ids(&["789"]);
        assert_eq!(request.variables, json!({ "distributorIDs": ["789"] }));

        let request = categories_by_paths(&["/electronics/capacitors"]);
        assert_eq!(
            request.variables,
            json!({ "categoryPaths": ["/electronics/capacitors"] })
        );
    }

    #[test]
    fn test_search_requests_carry_term_and_paging() {
        let request = basic_search("capacitor", 10, Some(20));
        assert_eq!(
            request.variables,
            json!({ "searchTerm": "capacitor", "limit": 10, "start": 20 })
        );

        let request = basic_mpn_search("NE555", 2, None);
        assert_eq!(
            request.variables,
            json!({ "searchTerm": "NE555", "limit": 2, "start": null })
        );
    }

    #[test]
    fn test_filtered_search_passes_filters_map_through() {
        let filters = json!({ "manufacturer_id": ["622"] });
        let request = filtered_mpn_search("resistor", 5, filters.clone());
        assert_eq!(request.variables["filters"], filters);
    }

    #[test]
    fn test_mpn_search_binds_all_declared_variables() {
        let request = mpn_search("NE555", "US", "USD", None, true, 10, Some(0));
        let variables = request.variables.as_object().unwrap();

        for name in [
            "searchTerm",
            "country",
            "currency",
            "filters",
            "inStockOnly",
            "limit",
            "start",
        ] {
            assert!(variables.contains_key(name), "missing variable {name}");
        }
        assert_eq!(variables["inStockOnly"], json!(true));
    }

    #[test]
    fn test_multi_mpn_search_wraps_query_batch() {
        let queries = json!([{ "mpn": "NE555", "limit": 1 }]);
        let request = multi_mpn_search("DE", "EUR", false, None, queries.clone());
        assert_eq!(request.variables["queries"], queries);
        assert!(request.document.contains("supMultiMatch"));
    }
}
