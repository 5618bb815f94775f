// Default settings
pub static DEFAULT_API_VERSION: &str = "2024-01";
pub static SHOP_DOMAIN_SUFFIX: &str = ".myshopify.com";

// Header names
pub static ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";
pub static REQUEST_ID_HEADER: &str = "X-Request-Id";
