//! Flattening of employees into spreadsheet rows.

use rust_decimal::Decimal;

use crate::models::EmployeeRecord;

/// The header row of every export. Column count, text and order are part of
/// the export contract.
pub const EXPORT_HEADER: [&str; 5] = ["ID", "Name", "Position", "Salary", "Contract Type"];

/// One data row of the export: an (employee, detail) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// The employee identifier.
    pub id: Option<i64>,
    /// The employee name.
    pub name: String,
    /// The employee position.
    pub position: String,
    /// The detail salary.
    pub salary: Option<Decimal>,
    /// The detail contract type.
    pub contract_type: Option<String>,
}

/// Flattens employees into export rows.
///
/// Emits one row per detail, employees in input order and details in detail
/// order. An employee without details contributes no rows.
///
/// # Examples
///
/// ```
/// use roster_service::export::build_rows;
/// use roster_service::models::{DetailRecord, EmployeeRecord};
/// use rust_decimal::Decimal;
///
/// let employees = vec![EmployeeRecord {
///     id: Some(1),
///     name: "Ann".to_string(),
///     position: "Eng".to_string(),
///     details: vec![DetailRecord::new(Decimal::new(100, 0), "FT", "2023")],
/// }];
///
/// let rows = build_rows(&employees);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].contract_type.as_deref(), Some("FT"));
/// ```
pub fn build_rows(employees: &[EmployeeRecord]) -> Vec<ExportRow> {
    employees
        .iter()
        .flat_map(|employee| {
            employee.details.iter().map(move |detail| ExportRow {
                id: employee.id,
                name: employee.name.clone(),
                position: employee.position.clone(),
                salary: detail.salary,
                contract_type: detail.contract_type.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetailRecord;

    fn create_employee(id: i64, name: &str, details: Vec<DetailRecord>) -> EmployeeRecord {
        EmployeeRecord {
            id: Some(id),
            name: name.to_string(),
            position: "Eng".to_string(),
            details,
        }
    }

    #[test]
    fn test_header_literal() {
        assert_eq!(
            EXPORT_HEADER,
            ["ID", "Name", "Position", "Salary", "Contract Type"]
        );
    }

    #[test]
    fn test_one_row_per_detail() {
        let employees = vec![
            create_employee(
                1,
                "Ann",
                vec![
                    DetailRecord::new(Decimal::new(100, 0), "FT", "2023"),
                    DetailRecord::new(Decimal::new(110, 0), "FT", "2024"),
                ],
            ),
            create_employee(2, "Bo", vec![]),
            create_employee(3, "Cy", vec![DetailRecord::default()]),
        ];

        let rows = build_rows(&employees);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].salary, Some(Decimal::new(100, 0)));
        assert_eq!(rows[1].salary, Some(Decimal::new(110, 0)));
        assert_eq!(rows[2].id, Some(3));
        assert_eq!(rows[2].salary, None);
        assert_eq!(rows[2].contract_type, None);
    }

    #[test]
    fn test_employees_without_details_contribute_nothing() {
        let employees = vec![create_employee(1, "Ann", vec![]), create_employee(2, "Bo", vec![])];
        assert!(build_rows(&employees).is_empty());
    }

    #[test]
    fn test_rows_follow_input_order() {
        let employees = vec![
            create_employee(9, "Zed", vec![DetailRecord::default()]),
            create_employee(1, "Ann", vec![DetailRecord::default()]),
        ];

        let ids: Vec<_> = build_rows(&employees).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(9), Some(1)]);
    }
}
