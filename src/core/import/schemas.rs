//! Default mapping schema tables
//!
//! The declarative rule tables that map platform order, address, and
//! line-item records onto store header and line records. Adding a target
//! field means adding one table row here, not writing per-field code.

use crate::mapping::{MappingRule, MappingSchema};

/// The three schema sections the orchestrator applies
#[derive(Debug, Clone)]
pub struct ImportSchemas {
    /// Order record -> header fields (billing section)
    pub header: MappingSchema,
    /// Shipping-address record -> header fields (shipping section)
    pub shipping: MappingSchema,
    /// Line-item record -> line fields
    pub line: MappingSchema,
}

impl Default for ImportSchemas {
    fn default() -> Self {
        Self {
            header: default_header_schema(),
            shipping: default_shipping_schema(),
            line: default_line_schema(),
        }
    }
}

/// Maps the platform order record onto the header's billing section
pub fn default_header_schema() -> MappingSchema {
    MappingSchema::new("header")
        .rule("orderno", MappingRule::path("id"))
        .rule("custid", MappingRule::path("customer_id"))
        .rule("orderdate", MappingRule::path("date_created").date("%Y%m%d"))
        .rule("shipdate", MappingRule::path("date_shipped").date("%Y%m%d"))
        .rule("subtotal", MappingRule::path("subtotal_ex_tax").currency())
        .rule("freight", MappingRule::path("base_shipping_cost").currency())
        .rule("ordertotal", MappingRule::path("total_inc_tax").currency())
        .rule("salestax", MappingRule::path("total_tax").currency())
        .rule(
            "contact",
            MappingRule::path("billing_address.first_name|billing_address.last_name").glue(" "),
        )
        .rule("custname", MappingRule::path("billing_address.company"))
        .rule("billname", MappingRule::path("billing_address.company"))
        .rule("billaddress", MappingRule::path("billing_address.street_1"))
        .rule("billaddress2", MappingRule::path("billing_address.street_2"))
        .rule("billcity", MappingRule::path("billing_address.city"))
        .rule("billstate", MappingRule::path("billing_address.state"))
        .rule("billzip", MappingRule::path("billing_address.zip"))
        .rule("billcountry", MappingRule::path("billing_address.country_iso2"))
        .rule("phone", MappingRule::path("billing_address.phone"))
        .rule("email", MappingRule::path("billing_address.email"))
        .rule("custpo", MappingRule::path("id"))
}

/// Maps the first shipping-address record onto the header's shipping section
pub fn default_shipping_schema() -> MappingSchema {
    MappingSchema::new("shipping")
        .rule("sconame", MappingRule::path("first_name|last_name").glue(" "))
        .rule("shipname", MappingRule::path("company"))
        .rule("shipaddress", MappingRule::path("street_1"))
        .rule("shipaddress2", MappingRule::path("street_2"))
        .rule("shipcity", MappingRule::path("city"))
        .rule("shipstate", MappingRule::path("state"))
        .rule("shipzip", MappingRule::path("zip"))
        .rule("shipcountry", MappingRule::path("country_iso2"))
        .rule("shipfreight", MappingRule::path("base_cost").currency())
}

/// Maps a line-item record onto a store line record
pub fn default_line_schema() -> MappingSchema {
    MappingSchema::new("line")
        .rule("orderno", MappingRule::path("order_id"))
        .rule("linenbr", MappingRule::path("id"))
        .rule("itemid", MappingRule::path("product_id"))
        .rule("price", MappingRule::path("base_price").currency())
        .rule("qty", MappingRule::path("quantity"))
        .rule("desc1", MappingRule::path("name").max_length(30))
        .rule("desc2", MappingRule::path("sku").max_length(30))
        .rule("qtyshipped", MappingRule::path("quantity_shipped"))
        .rule("totalprice", MappingRule::path("base_total").currency())
}
