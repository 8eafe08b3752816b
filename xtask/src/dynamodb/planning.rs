//! Pure functions for destroy planning (Functional Core).
//!
//! Deploy planning lives in `catalog_core::persistence`.

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what needs to happen to remove a table.
pub fn calculate_destroy_plan(existing_tables: &[String], table_name: &str) -> DestroyPlan {
    if existing_tables.iter().any(|t| t == table_name) {
        DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        }
    } else {
        DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        }
    }
}

/// Pure function: Format destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![
                format!("- Delete table: {}", table_name),
                "  WARNING: All data will be permanently deleted!".to_string(),
            ]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}
