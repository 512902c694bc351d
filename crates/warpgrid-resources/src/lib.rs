//! warpgrid-resources — resource vectors for scheduling decisions.
//!
//! A [`Resource`] is a sparse vector of quantities keyed by resource type
//! (`vcore`, `memory`, GPUs, custom types). It represents node capacity,
//! queue usage, allocation requests and guarantees alike. The crate
//! provides the arithmetic a scheduling loop needs on top of it: can this
//! request fit, which queue is most under-served, which resource is the
//! bottleneck.
//!
//! # Components
//!
//! - **`quantity`** — overflow-safe scalar add/sub/mul, clamping to the
//!   `i64` bounds instead of wrapping
//! - **`resource`** — the vector itself, the shared [`ZERO`], in-place
//!   accumulators for locally owned vectors
//! - **`algebra`** — add, subtract, multiply, component-wise min/max
//! - **`compare`** — fit checks, strict ordering, equality flavours
//! - **`fairness`** — dominant share, sorted-share comparison, dominant type
//! - **`capacity`** — absolute used percentage, fit score
//! - **`wire`** / **`config`** / **`parse`** — conversions from messages,
//!   JSON and textual configuration
//!
//! # Null handling
//!
//! Vectors that may be missing are passed as `Option<&Resource>`. `None`
//! reads as the empty vector except where a function documents otherwise.
//! Functions never mutate their inputs.
//!
//! # Diagnostics
//!
//! Overflow clamps (`warn`), negative shares and missing types (`debug`)
//! are emitted as `tracing` events. Install a subscriber in the host
//! process to collect them; no call fails because of a diagnostic.

pub mod algebra;
pub mod capacity;
pub mod compare;
pub mod config;
pub mod error;
pub mod fairness;
pub mod parse;
pub mod quantity;
pub mod resource;
pub mod wire;

pub use algebra::{
    add, add_only_existing, component_wise_max, component_wise_min,
    component_wise_min_only_existing, merge_if_not_present, multiply, multiply_by, sub,
    sub_eliminate_negative, sub_error_negative, sub_only_existing,
};
pub use capacity::{calculate_abs_used_capacity, fit_in_score};
pub use compare::{
    deep_equals, equals, equals_or_empty, fit_in, fit_in_max_undef, has_negative_value, is_empty,
    is_zero, match_any, strictly_greater_than, strictly_greater_than_only_existing,
    strictly_greater_than_or_equals, strictly_greater_than_zero,
};
pub use config::{CPU, MEMORY, ResourceConf};
pub use error::{ResourceError, ResourceResult};
pub use fairness::{
    comp_usage_ratio, comp_usage_ratio_separately, compare_shares, dominant_resource_type,
    fair_share, fairness_ratio, share_for_denominator, shares,
};
pub use parse::{parse_quantity, parse_vcore};
pub use quantity::{Quantity, add_safe, mul_safe, mul_safe_ratio, sub_safe};
pub use resource::{Resource, ZERO, clone_resource, dao_map, describe};
pub use wire::{QuantityProto, ResourceProto, to_proto};
