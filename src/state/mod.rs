/// State management module
///
/// This module handles all application state, including:
/// - Catalog records (data.rs)
/// - The embedded product and style catalogs (catalog.rs)
/// - Current selection and processing flag (selection.rs)
/// - Simulated transfer jobs and receipts (transfer.rs)

pub mod catalog;
pub mod data;
pub mod selection;
pub mod transfer;
