//! Catalog handlers: gated reads and the admin essay reorder.

mod get_package;
mod list_essays;
mod list_packages;
mod list_products;
mod reorder_essays;

pub use get_package::{GetPackageHandler, GetPackageQuery, GetPackageResult};
pub use list_essays::{ListEssaysHandler, ListEssaysQuery};
pub use list_packages::{ListPackagesHandler, ListPackagesQuery, ListPackagesResult};
pub use list_products::{ListProductsHandler, ListProductsQuery};
pub use reorder_essays::{
    EssayOrderItem, ReorderEssaysCommand, ReorderEssaysHandler, ReorderFailure, ReorderOutcome,
};
