//! Loading transactions from tabular files using excelstream.
//!
//! Supports four input conventions (`DatasetFormat`), mirroring the input
//! shapes the original reference tool accepted: a plain market-basket
//! list, an order/invoice detail table, a sparse wide table, and a wide
//! table of nominal columns. First row is always treated as a header and
//! skipped; malformed rows are logged and skipped rather than aborting
//! the whole load.

use crate::errors::{MiningError, Result};
use crate::transaction::Transaction;
use chrono::Utc;
use excelstream::streaming_reader::StreamingReader;
use excelstream::CsvReader;
use std::collections::HashMap;
use std::path::Path;

/// Column-count ceiling applied to item/selection columns. Extra columns
/// beyond this are dropped with a warning instead of erroring.
pub const MAX_ITEMS: usize = 999;

/// The four input conventions `DataLoader` understands.
#[derive(Debug, Clone)]
pub enum DatasetFormat {
    /// Each row is a transaction. `absent_sentinel`, if set, marks cell
    /// values that denote "no item" and must be stripped from the row.
    Basket { absent_sentinel: Option<String> },

    /// Long-form rows of (group, item). Rows are grouped by the value in
    /// `group_column`; within a group items are de-duplicated and sorted.
    /// Groups with fewer than two items are discarded.
    Detail {
        group_column: usize,
        item_column: usize,
    },

    /// Wide form: each of `item_columns` names an item via its header;
    /// a cell equal to `absent_sentinel` means that item is absent from
    /// the row, any other value means it is present.
    Sparse {
        absent_sentinel: String,
        item_columns: Vec<usize>,
    },

    /// Wide form: each of `columns` contributes exactly one item per row,
    /// synthesized as `"<header>=<value>"`.
    Nominal { columns: Vec<usize> },
}

/// Loads transactions from Excel/CSV files under a `DatasetFormat`.
pub struct DataLoader;

impl DataLoader {
    /// Loads transactions from a CSV file.
    ///
    /// # Example
    /// ```no_run
    /// use apriori_miner::data_loader::{DataLoader, DatasetFormat};
    ///
    /// let format = DatasetFormat::Basket { absent_sentinel: Some("nan".to_string()) };
    /// let transactions = DataLoader::from_csv_path("baskets.csv", format)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_csv_path<P: AsRef<Path>>(
        path: P,
        format: DatasetFormat,
    ) -> Result<Vec<Transaction>> {
        let mut reader = CsvReader::open(path.as_ref())
            .map_err(|e| MiningError::DataLoadError(format!("Failed to open CSV file: {}", e)))?;

        let mut header: Option<Vec<String>> = None;
        let mut rows: Vec<(usize, Vec<String>)> = Vec::new();

        for (row_idx, row_result) in reader.rows().enumerate() {
            let row = row_result.map_err(|e| {
                MiningError::DataLoadError(format!("Failed to read row {}: {}", row_idx, e))
            })?;
            let row_values: Vec<String> = row.into_iter().map(|v| v.to_string()).collect();

            if row_idx == 0 {
                header = Some(row_values);
                continue;
            }
            rows.push((row_idx, row_values));
        }

        Self::build_transactions(header.unwrap_or_default(), rows, format)
    }

    /// Loads transactions from an Excel sheet.
    pub fn from_excel_path<P: AsRef<Path>>(
        path: P,
        sheet_index: usize,
        format: DatasetFormat,
    ) -> Result<Vec<Transaction>> {
        let mut reader = StreamingReader::open(path.as_ref())
            .map_err(|e| MiningError::DataLoadError(format!("Failed to open Excel file: {}", e)))?;

        let mut header: Option<Vec<String>> = None;
        let mut rows: Vec<(usize, Vec<String>)> = Vec::new();

        let sheet_rows = reader.rows_by_index(sheet_index).map_err(|e| {
            MiningError::DataLoadError(format!("Failed to read sheet {}: {}", sheet_index, e))
        })?;

        for (row_idx, row_result) in sheet_rows.enumerate() {
            let row = row_result.map_err(|e| {
                MiningError::DataLoadError(format!("Failed to read row {}: {}", row_idx, e))
            })?;
            let row_values = row.to_strings();

            if row_idx == 0 {
                header = Some(row_values);
                continue;
            }
            rows.push((row_idx, row_values));
        }

        Self::build_transactions(header.unwrap_or_default(), rows, format)
    }

    /// Lists all sheet names from an Excel file.
    pub fn list_sheets<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let reader = StreamingReader::open(path.as_ref())
            .map_err(|e| MiningError::DataLoadError(format!("Failed to open Excel file: {}", e)))?;
        Ok(reader.sheet_names().to_vec())
    }

    fn build_transactions(
        header: Vec<String>,
        rows: Vec<(usize, Vec<String>)>,
        format: DatasetFormat,
    ) -> Result<Vec<Transaction>> {
        let transactions = match format {
            DatasetFormat::Basket { absent_sentinel } => {
                Self::build_basket(rows, absent_sentinel.as_deref())
            }
            DatasetFormat::Detail {
                group_column,
                item_column,
            } => Self::build_detail(rows, group_column, item_column),
            DatasetFormat::Sparse {
                absent_sentinel,
                item_columns,
            } => Self::build_sparse(&header, rows, &absent_sentinel, item_columns),
            DatasetFormat::Nominal { columns } => Self::build_nominal(&header, rows, columns),
        };

        if transactions.is_empty() {
            return Err(MiningError::DataLoadError(
                "No valid transactions found in input".to_string(),
            ));
        }

        Ok(transactions)
    }

    fn build_basket(
        rows: Vec<(usize, Vec<String>)>,
        absent_sentinel: Option<&str>,
    ) -> Vec<Transaction> {
        rows.into_iter()
            .filter_map(|(row_idx, row_values)| {
                let items: Vec<String> = row_values
                    .into_iter()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .filter(|v| absent_sentinel != Some(v.as_str()))
                    .collect();

                if items.is_empty() {
                    log::warn!("Skipping row {}: no items after filtering", row_idx);
                    return None;
                }
                Some(Transaction::new(
                    format!("row{}", row_idx),
                    items,
                    Utc::now(),
                ))
            })
            .collect()
    }

    fn build_detail(
        rows: Vec<(usize, Vec<String>)>,
        group_column: usize,
        item_column: usize,
    ) -> Vec<Transaction> {
        let mut group_order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<String>> = HashMap::new();

        for (row_idx, row_values) in rows {
            let max_col = group_column.max(item_column);
            if row_values.len() <= max_col {
                log::warn!(
                    "Skipping row {}: insufficient columns (expected at least {})",
                    row_idx,
                    max_col + 1
                );
                continue;
            }
            let group = row_values[group_column].trim().to_string();
            let item = row_values[item_column].trim().to_string();
            if group.is_empty() || item.is_empty() {
                log::warn!("Skipping row {}: empty group or item", row_idx);
                continue;
            }
            groups.entry(group.clone()).or_insert_with(|| {
                group_order.push(group.clone());
                Vec::new()
            });
            groups.get_mut(&group).unwrap().push(item);
        }

        group_order
            .into_iter()
            .filter_map(|group| {
                let mut items = groups.remove(&group)?;
                items.sort_unstable();
                items.dedup();
                if items.len() < 2 {
                    return None;
                }
                Some(Transaction::new(group, items, Utc::now()))
            })
            .collect()
    }

    fn build_sparse(
        header: &[String],
        rows: Vec<(usize, Vec<String>)>,
        absent_sentinel: &str,
        item_columns: Vec<usize>,
    ) -> Vec<Transaction> {
        let item_columns = Self::capped_columns(item_columns);

        rows.into_iter()
            .filter_map(|(row_idx, row_values)| {
                let items: Vec<String> = item_columns
                    .iter()
                    .filter_map(|&col| {
                        let cell = row_values.get(col)?.trim();
                        if cell == absent_sentinel {
                            None
                        } else {
                            header.get(col).map(|name| name.clone())
                        }
                    })
                    .collect();

                if items.is_empty() {
                    log::warn!("Skipping row {}: no present items", row_idx);
                    return None;
                }
                Some(Transaction::new(
                    format!("row{}", row_idx),
                    items,
                    Utc::now(),
                ))
            })
            .collect()
    }

    fn build_nominal(
        header: &[String],
        rows: Vec<(usize, Vec<String>)>,
        columns: Vec<usize>,
    ) -> Vec<Transaction> {
        let columns = Self::capped_columns(columns);

        rows.into_iter()
            .filter_map(|(row_idx, row_values)| {
                let items: Vec<String> = columns
                    .iter()
                    .filter_map(|&col| {
                        let name = header.get(col)?;
                        let value = row_values.get(col)?.trim();
                        Some(format!("{}={}", name, value))
                    })
                    .collect();

                if items.is_empty() {
                    log::warn!("Skipping row {}: no selected columns present", row_idx);
                    return None;
                }
                Some(Transaction::new(
                    format!("row{}", row_idx),
                    items,
                    Utc::now(),
                ))
            })
            .collect()
    }

    fn capped_columns(columns: Vec<usize>) -> Vec<usize> {
        if columns.len() > MAX_ITEMS {
            log::warn!(
                "Max column limit exceeded ({}). Only the first {} columns will be processed.",
                MAX_ITEMS,
                MAX_ITEMS
            );
            columns.into_iter().take(MAX_ITEMS).collect()
        } else {
            columns
        }
    }
}
