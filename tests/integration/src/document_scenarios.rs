//! End-to-end edits on the sample UI documents
//!
//! Each test copies a fixture into a temporary workspace, applies edits
//! through `apply_to_file` and checks the document on disk.

use pretty_assertions::assert_eq;
use splice_blocks::{Error as BlocksError, TokenPair, count_occurrences, locate_nth_block};
use splice_core::{ApplyOptions, Edit, Error, apply_to_file};
use splice_test_utils::TestWorkspace;
use splice_test_utils::fixtures::{DASHBOARD, ORDERS};

const DISCOUNT_LINE: &str = "{order.discountAmount > 0 && (\n              <div className=\"text-success small\">خصم: {currency(order.discountAmount)}</div>\n            )}\n";

const FEE_LINES: &str = "            {order.storeDiscountAmount > 0 && (
              <div className=\"text-success small\">خصم المتجر: {currency(order.storeDiscountAmount)}</div>
            )}
            {order.shippingFee > 0 && (
              <div className=\"small\">رسوم الشحن: {currency(order.shippingFee)}</div>
            )}
";

const COLUMN: &str = r#"<div className="col-md-6">"#;

const SUMMARY_COLUMN: &str = r#"<div className="col-md-6">
            <h6>مراجعة المبلغ</h6>
            <div className="mb-1 d-flex justify-content-between">
              <span>قيمة المنتجات</span>
              <strong>{currency(goodsTotal)}</strong>
            </div>
            {shippingFee > 0 && (
              <div className="mb-1 d-flex justify-content-between">
                <span>رسوم الشحن</span>
                <strong>{currency(shippingFee)}</strong>
              </div>
            )}
            <div className="mb-2 d-flex justify-content-between border-top pt-2">
              <span>الإجمالي النهائي</span>
              <strong>{currency(order.totalPrice)}</strong>
            </div>
          </div>"#;

// ============================================================================
// Dashboard: insert fee lines above the discount line
// ============================================================================

#[test]
fn test_dashboard_fee_lines_inserted_before_discount() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(DASHBOARD, "src/pages/Dashboard.js");
    let path = ws.normalized("src/pages/Dashboard.js");
    let before = ws.read("src/pages/Dashboard.js");

    let outcome = apply_to_file(
        &path,
        &[Edit::insert_before(DISCOUNT_LINE, FEE_LINES)],
        &ApplyOptions::default(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert!(outcome.written);
    assert_eq!(outcome.summary.inserted - outcome.summary.deleted, 6);

    let after = ws.read("src/pages/Dashboard.js");
    let expected = format!("{FEE_LINES}{DISCOUNT_LINE}");
    assert!(after.contains(&expected));
    assert_eq!(after.len(), before.len() + FEE_LINES.len());
    assert_eq!(after.replacen(FEE_LINES, "", 1), before);
}

#[test]
fn test_dashboard_garbled_marker_reports_not_found() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(DASHBOARD, "Dashboard.js");
    let before = ws.read("Dashboard.js");
    let garbled = DISCOUNT_LINE.replace("خصم", "???");

    let err = apply_to_file(
        &ws.normalized("Dashboard.js"),
        &[Edit::insert_before(garbled, FEE_LINES)],
        &ApplyOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::EditInFile {
            edit: 1,
            source: BlocksError::MarkerNotFound { found: 0, .. },
            ..
        }
    ));
    ws.assert_file_eq("Dashboard.js", &before);
}

// ============================================================================
// Orders: replace the second column
// ============================================================================

#[test]
fn test_orders_second_column_replaced() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(ORDERS, "src/pages/Orders.js");
    let before = ws.read("src/pages/Orders.js");
    let old_block = locate_nth_block(&before, COLUMN, 2, &TokenPair::element("div")).unwrap();

    apply_to_file(
        &ws.normalized("src/pages/Orders.js"),
        &[Edit::replace_div(COLUMN, 2, SUMMARY_COLUMN)],
        &ApplyOptions::default(),
    )
    .unwrap();

    let after = ws.read("src/pages/Orders.js");
    assert_eq!(&after[..old_block.start], &before[..old_block.start]);
    assert_eq!(
        &after[old_block.start + SUMMARY_COLUMN.len()..],
        &before[old_block.end..]
    );
    assert_eq!(count_occurrences(&after, COLUMN), 2);
    assert!(!after.contains("Payment & Status"));
    assert!(after.contains("<h6>Customer</h6>"));
    assert!(after.ends_with("export default OrderModal;\n"));
}

#[test]
fn test_orders_replacement_keeps_document_balanced() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(ORDERS, "Orders.js");

    apply_to_file(
        &ws.normalized("Orders.js"),
        &[Edit::replace_div(COLUMN, 2, SUMMARY_COLUMN)],
        &ApplyOptions::default(),
    )
    .unwrap();

    let after = ws.read("Orders.js");
    let body = locate_nth_block(&after, r#"<div className="modal-body">"#, 1, &TokenPair::element("div"))
        .unwrap();
    assert!(body.slice(&after).unwrap().contains(SUMMARY_COLUMN));
}

#[test]
fn test_orders_third_column_does_not_exist() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(ORDERS, "Orders.js");
    let before = ws.read("Orders.js");

    let err = apply_to_file(
        &ws.normalized("Orders.js"),
        &[Edit::replace_div(COLUMN, 3, SUMMARY_COLUMN)],
        &ApplyOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::EditInFile {
            source: BlocksError::MarkerNotFound {
                occurrence: 3,
                found: 2,
                ..
            },
            ..
        }
    ));
    ws.assert_file_eq("Orders.js", &before);
}

#[test]
fn test_orders_dry_run_leaves_file() {
    let ws = TestWorkspace::new();
    ws.copy_fixture(ORDERS, "Orders.js");
    let before = ws.read("Orders.js");

    let outcome = apply_to_file(
        &ws.normalized("Orders.js"),
        &[Edit::replace_div(COLUMN, 2, SUMMARY_COLUMN)],
        &ApplyOptions::dry_run(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert!(!outcome.written);
    assert_ne!(outcome.checksum_before, outcome.checksum_after);
    assert!(outcome.diff.unwrap().contains("+            <h6>مراجعة المبلغ</h6>"));
    ws.assert_file_eq("Orders.js", &before);
}
