//! Declared SMI type name → canonical output type mapping.
//!
//! The output vocabulary is the small set of types the foreign-table target
//! understands: `integer`, `biginteger`, `string`, `ip`, `boolean`, `float`.
//! The mapping is fixed at compile time; there is no runtime registration.

/// Map a declared SMI type name to its canonical output type.
///
/// Matching is case-insensitive. Unrecognized names fall back to `string`,
/// never an error.
#[must_use]
pub fn canonical_type(declared: &str) -> &'static str {
    match declared.to_ascii_lowercase().as_str() {
        // 32-bit integers, counters and gauges
        "integer" | "integer32" | "gauge32" | "counter32" | "unsigned32" | "int" | "uint"
        | "counter" => "integer",

        // 64-bit counters
        "counter64" => "biginteger",

        // Octet strings and string-rendered values
        "octetstring" | "displaystring" | "physaddress" | "macaddress" | "string"
        | "utf8string" | "bitstring" | "timeticks" => "string",

        // Addresses
        "ipaddress" => "ip",

        // Object identifiers render as dotted strings
        "objectidentifier" | "oid" => "string",

        // Booleans
        "truthvalue" | "boolean" => "boolean",

        // Floating point
        "float" | "float32" | "float64" | "double" => "float",

        _ => "string",
    }
}
