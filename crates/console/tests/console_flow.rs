//! Black-box test of the menu flows: scripted stdin, captured stdout.

use std::io::Cursor;

use stockdesk_auth::{Credential, Role};
use stockdesk_console::App;
use stockdesk_core::{ProductId, Username};

fn seeded_app() -> App {
    let mut app = App::new();
    app.create_user(
        Username::new("admin").unwrap(),
        Credential::new("adminpass"),
        Role::Admin,
    )
    .unwrap();
    app.create_user(
        Username::new("user").unwrap(),
        Credential::new("userpass"),
        Role::User,
    )
    .unwrap();
    app
}

fn run_script(app: &mut App, script: &str) -> String {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    app.run(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn full_session_covers_login_mutation_and_browsing() {
    let mut app = seeded_app();
    let alerts = app.inventory().subscribe_alerts();

    let script = "\
1
admin
wrong
1
user
userpass
1
admin
adminpass
1
P-1
Smartphone
Electronics
499.99
12
2
P-1
price
449.99

5
P-1
-5
4
6
2
user
userpass
2
phone

4
3
";
    let output = run_script(&mut app, script);

    // Failed login, then a regular user bounced off the admin menu.
    assert!(output.contains("invalid username or password"));
    assert!(output.contains("permission denied: requires the Admin role"));

    // Admin session: add, partial update, stock adjustment.
    assert!(output.contains("Welcome, admin!"));
    assert!(output.contains("Product Smartphone added successfully."));
    assert!(output.contains("Product updated successfully."));
    assert!(output.contains("Stock level is now 7."));
    assert!(output.contains("Product(P-1, Smartphone, Electronics, 449.99, 7)"));
    assert!(output.contains("Logged out successfully."));

    // User session: the name search finds the product.
    assert!(output.contains("Welcome, user!"));
    assert!(output.contains("Exiting the system."));

    // State after the session: update touched only the price, the
    // adjustment landed, and nothing was duplicated.
    let product = app.inventory().get(&ProductId::new("P-1").unwrap()).unwrap();
    assert_eq!(product.name(), "Smartphone");
    assert_eq!(product.price_cents(), 44_999);
    assert_eq!(product.stock_quantity(), 7);
    assert_eq!(app.inventory().len(), 1);

    // Dropping to 7 (< 10) raised exactly one low-stock alert.
    let raised = alerts.drain();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].stock_quantity, 7);
    assert_eq!(raised[0].name, "Smartphone");

    // The session ended logged out.
    assert!(app.gate().current().is_none());
}

#[test]
fn recoverable_errors_are_printed_and_the_loop_continues() {
    let mut app = seeded_app();

    let script = "\
1
admin
adminpass
3
P-9
2
P-9
warranty
name
Gadget

6
3
";
    let output = run_script(&mut app, script);

    // Deleting an absent product reports NotFound and keeps going.
    assert!(output.contains("product not found: P-9"));
    // Unknown field name gets a typed rejection before any lookup.
    assert!(output.contains("unknown product field: warranty"));
    // The loop survived all of it.
    assert!(output.contains("Exiting the system."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let mut app = seeded_app();
    let output = run_script(&mut app, "1\nadmin\n");
    assert!(output.contains("Enter password: "));
}

#[test]
fn duplicate_add_overwrites_without_an_error() {
    let mut app = seeded_app();

    let script = "\
1
admin
adminpass
1
P-1
Smartphone
Electronics
499.99
12
1
P-1
Earbuds
Electronics
59.99
50
4
6
3
";
    let output = run_script(&mut app, script);

    assert!(output.contains("Product Earbuds added successfully."));
    assert!(!output.contains("already"));
    assert_eq!(app.inventory().len(), 1);
    let product = app.inventory().get(&ProductId::new("P-1").unwrap()).unwrap();
    assert_eq!(product.name(), "Earbuds");
    assert_eq!(product.stock_quantity(), 50);
}
