//! The menu-driven application: main menu, admin menu, user menu.

use std::io::{self, BufRead, Write};

use stockdesk_auth::{AccessGate, AuthError, Credential, Role};
use stockdesk_catalog::{Inventory, Product, ProductField, ProductUpdate};
use stockdesk_core::{ProductId, Username};

use crate::input::{parse_price_cents, parse_quantity, prompt};
use crate::render::{products_to_json, write_products};

/// One inventory, one gate, one operator at a time.
///
/// Every menu action dispatches through the core contract and reports
/// recoverable errors inline; nothing here ever terminates the process.
#[derive(Debug, Default)]
pub struct App {
    inventory: Inventory,
    gate: AccessGate,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user account (startup wiring; there is no self-service
    /// registration flow).
    pub fn create_user(
        &mut self,
        username: Username,
        credential: Credential,
        role: Role,
    ) -> Result<(), AuthError> {
        self.gate.create_user(username, credential, role)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Run the main menu until the operator exits (or input ends).
    pub fn run<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> io::Result<()> {
        loop {
            writeln!(writer)?;
            writeln!(writer, "Main Menu:")?;
            writeln!(writer, "1. Login as Admin")?;
            writeln!(writer, "2. Login as User")?;
            writeln!(writer, "3. Exit")?;
            let Some(choice) = prompt(reader, writer, "Choose an action: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => {
                    if self.login(reader, writer)? {
                        self.admin_menu(reader, writer)?;
                    }
                }
                "2" => {
                    if self.login(reader, writer)? {
                        self.user_menu(reader, writer)?;
                    }
                }
                "3" => {
                    writeln!(writer, "Exiting the system.")?;
                    return Ok(());
                }
                _ => writeln!(writer, "Invalid choice. Try again.")?,
            }
        }
    }

    fn login<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> io::Result<bool> {
        let Some(raw_username) = prompt(reader, writer, "Enter username: ")? else {
            return Ok(false);
        };
        let Some(password) = prompt(reader, writer, "Enter password: ")? else {
            return Ok(false);
        };

        let username = match Username::new(raw_username) {
            Ok(username) => username,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(false);
            }
        };

        match self.gate.login(&username, &Credential::new(password)) {
            Ok(session) => {
                writeln!(writer, "Welcome, {}!", session.username())?;
                Ok(true)
            }
            Err(err) => {
                writeln!(writer, "{err}")?;
                Ok(false)
            }
        }
    }

    fn admin_menu<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        // The role check guards the whole menu; a regular user who picked
        // "Login as Admin" is bounced back out.
        if let Err(err) = self.gate.require_role(Role::Admin) {
            writeln!(writer, "{err}")?;
            self.gate.logout();
            return Ok(());
        }

        loop {
            writeln!(writer)?;
            writeln!(writer, "Admin Menu:")?;
            writeln!(writer, "1. Add Product")?;
            writeln!(writer, "2. Update Product")?;
            writeln!(writer, "3. Delete Product")?;
            writeln!(writer, "4. View All Products")?;
            writeln!(writer, "5. Adjust Stock")?;
            writeln!(writer, "6. Logout")?;
            let Some(choice) = prompt(reader, writer, "Choose an action: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.add_product(reader, writer)?,
                "2" => self.update_product(reader, writer)?,
                "3" => self.delete_product(reader, writer)?,
                "4" => write_products(writer, self.inventory.products())?,
                "5" => self.adjust_stock(reader, writer)?,
                "6" => {
                    self.gate.logout();
                    writeln!(writer, "Logged out successfully.")?;
                    return Ok(());
                }
                _ => writeln!(writer, "Invalid choice. Try again.")?,
            }
        }
    }

    fn user_menu<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        loop {
            writeln!(writer)?;
            writeln!(writer, "User Menu:")?;
            writeln!(writer, "1. View All Products")?;
            writeln!(writer, "2. Search Product")?;
            writeln!(writer, "3. Export Catalog (JSON)")?;
            writeln!(writer, "4. Logout")?;
            let Some(choice) = prompt(reader, writer, "Choose an action: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => write_products(writer, self.inventory.products())?,
                "2" => self.search_product(reader, writer)?,
                "3" => match products_to_json(self.inventory.products()) {
                    Ok(json) => writeln!(writer, "{json}")?,
                    Err(err) => writeln!(writer, "{err}")?,
                },
                "4" => {
                    self.gate.logout();
                    writeln!(writer, "Logged out successfully.")?;
                    return Ok(());
                }
                _ => writeln!(writer, "Invalid choice. Try again.")?,
            }
        }
    }

    fn add_product<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let Some(raw_id) = prompt(reader, writer, "Enter Product ID: ")? else {
            return Ok(());
        };
        let Some(name) = prompt(reader, writer, "Enter Product Name: ")? else {
            return Ok(());
        };
        let Some(category) = prompt(reader, writer, "Enter Product Category: ")? else {
            return Ok(());
        };
        let Some(raw_price) = prompt(reader, writer, "Enter Product Price: ")? else {
            return Ok(());
        };
        let Some(raw_stock) = prompt(reader, writer, "Enter Stock Quantity: ")? else {
            return Ok(());
        };

        let product = ProductId::new(raw_id)
            .and_then(|id| {
                let price_cents = parse_price_cents(&raw_price)?;
                let stock_quantity = parse_quantity(&raw_stock)?;
                Product::new(id, name, category, price_cents, stock_quantity)
            });
        match product {
            Ok(product) => {
                let name = product.name().to_string();
                self.inventory.add(product);
                writeln!(writer, "Product {name} added successfully.")?;
            }
            Err(err) => writeln!(writer, "{err}")?,
        }
        Ok(())
    }

    fn update_product<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let Some(raw_id) = prompt(reader, writer, "Enter Product ID to update: ")? else {
            return Ok(());
        };
        let id = match ProductId::new(raw_id) {
            Ok(id) => id,
            Err(err) => {
                writeln!(writer, "{err}")?;
                return Ok(());
            }
        };

        let mut update = ProductUpdate::new();
        loop {
            let Some(raw_field) = prompt(
                reader,
                writer,
                "Field to update (name, category, price, stock_quantity; blank to apply): ",
            )?
            else {
                return Ok(());
            };
            if raw_field.is_empty() {
                break;
            }

            let field = match raw_field.parse::<ProductField>() {
                Ok(field) => field,
                Err(err) => {
                    writeln!(writer, "{err}")?;
                    continue;
                }
            };

            let Some(value) = prompt(reader, writer, &format!("New {}: ", field.as_str()))? else {
                return Ok(());
            };
            match field {
                ProductField::Name => update.name = Some(value),
                ProductField::Category => update.category = Some(value),
                ProductField::Price => match parse_price_cents(&value) {
                    Ok(cents) => update.price_cents = Some(cents),
                    Err(err) => writeln!(writer, "{err}")?,
                },
                ProductField::StockQuantity => match parse_quantity(&value) {
                    Ok(quantity) => update.stock_quantity = Some(quantity),
                    Err(err) => writeln!(writer, "{err}")?,
                },
            }
        }

        if update.is_empty() {
            writeln!(writer, "Nothing to update.")?;
            return Ok(());
        }
        match self.inventory.update(&id, &update) {
            Ok(()) => writeln!(writer, "Product updated successfully.")?,
            Err(err) => writeln!(writer, "{err}")?,
        }
        Ok(())
    }

    fn delete_product<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let Some(raw_id) = prompt(reader, writer, "Enter Product ID to delete: ")? else {
            return Ok(());
        };
        let result = ProductId::new(raw_id).and_then(|id| self.inventory.remove(&id));
        match result {
            Ok(_) => writeln!(writer, "Product deleted successfully.")?,
            Err(err) => writeln!(writer, "{err}")?,
        }
        Ok(())
    }

    fn adjust_stock<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let Some(raw_id) = prompt(reader, writer, "Enter Product ID: ")? else {
            return Ok(());
        };
        let Some(raw_delta) = prompt(reader, writer, "Enter quantity change (e.g. -5 or 20): ")?
        else {
            return Ok(());
        };

        let result = ProductId::new(raw_id).and_then(|id| {
            let delta = parse_quantity(&raw_delta)?;
            self.inventory.adjust_stock(&id, delta)
        });
        match result {
            Ok(new_quantity) => writeln!(writer, "Stock level is now {new_quantity}.")?,
            Err(err) => writeln!(writer, "{err}")?,
        }
        Ok(())
    }

    fn search_product<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<()> {
        let Some(name) = prompt(
            reader,
            writer,
            "Enter Product Name to search (leave blank for category search): ",
        )?
        else {
            return Ok(());
        };
        let Some(category) = prompt(
            reader,
            writer,
            "Enter Product Category to search (leave blank for name search): ",
        )?
        else {
            return Ok(());
        };

        let results = self.inventory.search(&name, &category);
        write_products(writer, results.into_iter())
    }
}
