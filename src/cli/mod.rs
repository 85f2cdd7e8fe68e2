//! Menu-driven terminal front end. All bookkeeping flows through the
//! [`Bookkeeper`] facade; this layer only gathers input and renders state.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::auth::Credentials;
use crate::core::Bookkeeper;
use crate::domain::{Catalog, PaymentMethod};
use crate::errors::BooksError;
use crate::storage::JsonStorage;

const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Entry point for the interactive shell. With `--report` the profitability
/// summary is printed non-interactively instead.
pub fn run() -> Result<(), BooksError> {
    crate::init();

    let storage = JsonStorage::new_default()?;
    let mut books = Bookkeeper::open(Box::new(storage), Catalog::kitchenware())?;

    if std::env::args().any(|arg| arg == "--report") {
        print_profitability(&books);
        return Ok(());
    }

    login(&Credentials::admin_default())?;
    println!("{}", "TOKO DAPUR KITA".bold());

    let menu = [
        "Inventory entry",
        "Sales entry",
        "Transactions",
        "Journal",
        "Profitability",
        "Quit",
    ];
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Menu")
            .items(&menu)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        let outcome = match choice {
            0 => inventory_menu(&mut books),
            1 => sales_menu(&mut books),
            2 => transactions_menu(&mut books),
            3 => journal_menu(&mut books),
            4 => {
                print_profitability(&books);
                Ok(())
            }
            _ => return Ok(()),
        };
        if let Err(err) = outcome {
            if err.is_persistence() {
                return Err(err);
            }
            println!("{}", err.to_string().red());
        }
    }
}

fn login(gate: &Credentials) -> Result<(), BooksError> {
    for _ in 0..MAX_LOGIN_ATTEMPTS {
        let username: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()
            .map_err(prompt_err)?;
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()
            .map_err(prompt_err)?;
        if gate.authenticate(&username, &password) {
            return Ok(());
        }
        println!("{}", "Invalid username or password.".red());
    }
    Err(BooksError::validation("too many failed login attempts"))
}

fn inventory_menu(books: &mut Bookkeeper) -> Result<(), BooksError> {
    let (date, product, quantity) = event_inputs(books.catalog())?;
    let method = select_method(&[
        PaymentMethod::Cash,
        PaymentMethod::Credit,
        PaymentMethod::PurchaseReturn,
    ])?;
    books.record_inventory_event(&date, &product, quantity, method)?;
    println!("{}", "Inventory event recorded.".green());
    Ok(())
}

fn sales_menu(books: &mut Bookkeeper) -> Result<(), BooksError> {
    let (date, product, quantity) = event_inputs(books.catalog())?;
    let method = select_method(&[
        PaymentMethod::Cash,
        PaymentMethod::Credit,
        PaymentMethod::SaleReturn,
    ])?;
    books.record_sale_event(&date, &product, quantity, method)?;
    println!("{}", "Sale recorded.".green());
    Ok(())
}

fn event_inputs(catalog: &Catalog) -> Result<(String, String, u32), BooksError> {
    let date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Date (YYYY-MM-DD)")
        .interact_text()
        .map_err(prompt_err)?;
    let names = catalog.product_names();
    let labels: Vec<String> = catalog
        .entries()
        .iter()
        .map(|entry| format!("{} (Rp {})", entry.name, entry.unit_price))
        .collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Product")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    let quantity: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Quantity")
        .interact_text()
        .map_err(prompt_err)?;
    Ok((date, names[picked].to_string(), quantity))
}

fn select_method(methods: &[PaymentMethod]) -> Result<PaymentMethod, BooksError> {
    let labels: Vec<&str> = methods.iter().map(|m| m.label()).collect();
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Payment method")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(methods[picked])
}

fn transactions_menu(books: &mut Bookkeeper) -> Result<(), BooksError> {
    if books.store().transactions.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }
    println!("{}", "Transactions".bold());
    for (i, txn) in books.store().transactions.iter().enumerate() {
        println!(
            "{:>3}  {}  {:<20} {:<16} {:>12}  {}",
            i, txn.date, txn.product, txn.description, txn.amount, txn.payment_method
        );
    }
    if confirm_delete("transaction")? {
        let index = read_index()?;
        let removed = books.delete_transaction(index)?;
        println!(
            "{}",
            format!("Deleted transaction for {} and its linked records.", removed.product).green()
        );
    }
    Ok(())
}

fn journal_menu(books: &mut Bookkeeper) -> Result<(), BooksError> {
    if books.store().journal_entries.is_empty() {
        println!("No journal entries yet.");
        return Ok(());
    }
    println!("{}", "Journal".bold());
    for (i, entry) in books.store().journal_entries.iter().enumerate() {
        println!(
            "{:>3}  {}  {:<20} {:>12} {:>12}  {}",
            i, entry.date, entry.account, entry.debit, entry.credit, entry.description
        );
    }
    if confirm_delete("journal entry")? {
        let index = read_index()?;
        let removed = books.delete_journal_entry(index)?;
        println!(
            "{}",
            format!("Deleted {} entry dated {}.", removed.account, removed.date).green()
        );
    }
    Ok(())
}

fn confirm_delete(noun: &str) -> Result<bool, BooksError> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete a {noun}?"))
        .items(&["Back", "Delete"])
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(choice == 1)
}

fn read_index() -> Result<usize, BooksError> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Index")
        .interact_text()
        .map_err(prompt_err)
}

fn print_profitability(books: &Bookkeeper) {
    let report = books.profitability();
    println!("{}", "Profitability".bold());
    println!("Total inventory cost : Rp {}", report.total_inventory_cost);
    println!("Total sales revenue  : Rp {}", report.total_sales_revenue);
    println!("Profit               : Rp {}", report.profit);
}

fn prompt_err(err: dialoguer::Error) -> BooksError {
    match err {
        dialoguer::Error::IO(io) => BooksError::Io(io),
    }
}
