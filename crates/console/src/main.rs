use stockdesk_auth::{Credential, Role};
use stockdesk_console::App;
use stockdesk_core::Username;

fn main() -> anyhow::Result<()> {
    stockdesk_observability::init();

    let mut app = App::new();
    // Demo accounts; there is no registration flow.
    app.create_user(
        Username::new("admin")?,
        Credential::new("adminpass"),
        Role::Admin,
    )?;
    app.create_user(
        Username::new("user")?,
        Credential::new("userpass"),
        Role::User,
    )?;

    tracing::info!("stockdesk console ready");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
