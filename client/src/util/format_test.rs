use super::*;

#[test]
fn format_price_keeps_cents() {
    assert_eq!(format_price(999.99), "$999.99");
    assert_eq!(format_price(15.99), "$15.99");
}

#[test]
fn format_price_pads_whole_amounts() {
    assert_eq!(format_price(24.0), "$24.00");
    assert_eq!(format_price(0.5), "$0.50");
}

#[test]
fn count_label_appends_total() {
    assert_eq!(count_label("Products", 3), "Products (3)");
    assert_eq!(count_label("Users", 0), "Users (0)");
}
