//! The interactive operator menu.
//!
//! Each numbered entry maps 1:1 onto one engine or store operation. Failed
//! lookups and empty collections are reported as messages; no menu action
//! terminates the loop except Exit (or end of input).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tabled::{settings::Style, Table};

use crate::catalog::{CatalogEngine, Item, ItemRef};
use crate::store;
use crate::Result;

/// An interactive session over one catalog engine.
pub struct MenuSession {
    engine: CatalogEngine,
    data_file: PathBuf,
}

impl MenuSession {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            engine: CatalogEngine::new(),
            data_file,
        }
    }

    pub fn engine(&self) -> &CatalogEngine {
        &self.engine
    }

    /// Run the menu loop on stdin until the operator exits.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run_with_input(&mut input)
    }

    /// Run the menu loop against any line-oriented input. End of input is
    /// treated as Exit.
    pub fn run_with_input<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        loop {
            print_menu();
            let Some(choice) = prompt(input, "Choose: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.add_item(input)?,
                "2" => self.view_items(),
                "3" => self.delete_item(input)?,
                "4" => self.undo_delete(),
                "5" => self.search_by_id(input)?,
                "6" => self.search_by_name(input)?,
                "7" => self.search_by_category(input)?,
                "8" => self.save(),
                "9" => self.load(),
                "10" => self.view_urgent(),
                "11" => {
                    println!("Goodbye!");
                    break;
                }
                _ => println!("Invalid choice. Try again."),
            }
        }
        Ok(())
    }

    fn add_item<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        let Some(id) = prompt(input, "Enter ID: ")? else {
            return Ok(());
        };
        let Ok(id) = id.trim().parse::<i64>() else {
            println!("Invalid number. Item not added.");
            return Ok(());
        };
        let Some(name) = prompt(input, "Enter Name: ")? else {
            return Ok(());
        };
        let Some(description) = prompt(input, "Enter Description: ")? else {
            return Ok(());
        };
        let Some(category) = prompt(input, "Enter Category: ")? else {
            return Ok(());
        };
        let Some(price) = prompt(input, "Enter Price: ")? else {
            return Ok(());
        };
        let Ok(price) = price.trim().parse::<f64>() else {
            println!("Invalid number. Item not added.");
            return Ok(());
        };

        self.engine
            .insert(Item::new(id, name, description, category, price));
        println!("Item added.");
        Ok(())
    }

    fn view_items(&self) {
        let items = self.engine.list_all();
        if items.is_empty() {
            println!("No items.");
        } else {
            println!("{}", render_items(&items));
        }
    }

    fn delete_item<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        let Some(id) = prompt(input, "Enter ID to delete: ")? else {
            return Ok(());
        };
        let Ok(id) = id.trim().parse::<i64>() else {
            println!("Invalid number.");
            return Ok(());
        };

        if self.engine.remove(id).is_some() {
            println!("Item deleted and stored for undo.");
        } else {
            println!("Item not found.");
        }
        Ok(())
    }

    fn undo_delete(&mut self) {
        if let Some(item) = self.engine.undo() {
            println!("Undo successful. Item restored.");
            println!("{item}");
        } else {
            println!("Nothing to undo.");
        }
    }

    fn search_by_id<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        let Some(id) = prompt(input, "Enter ID to search: ")? else {
            return Ok(());
        };
        let Ok(id) = id.trim().parse::<i64>() else {
            println!("Invalid number.");
            return Ok(());
        };

        match self.engine.search_by_id(id) {
            Some(item) => println!("{item}"),
            None => println!("Item not found."),
        }
        Ok(())
    }

    fn search_by_name<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        let Some(name) = prompt(input, "Enter Name to search: ")? else {
            return Ok(());
        };

        match self.engine.search_by_name(name.trim()) {
            Some(item) => println!("{item}"),
            None => println!("Item not found."),
        }
        Ok(())
    }

    fn search_by_category<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        let Some(category) = prompt(input, "Enter Category to search: ")? else {
            return Ok(());
        };
        let category = category.trim();

        let matches = self.engine.scan_by_category(category);
        if matches.is_empty() {
            println!("No items found in category: {category}");
        } else {
            for item in matches {
                println!("{item}");
            }
        }
        Ok(())
    }

    fn save(&self) {
        match store::save(&self.engine, &self.data_file) {
            Ok(_) => println!("Items saved to file."),
            Err(e) => println!("Error saving file: {e}"),
        }
    }

    fn load(&mut self) {
        match store::load(&mut self.engine, &self.data_file) {
            Ok(_) => println!("Items loaded from file."),
            Err(e) => println!("Error loading file: {e}"),
        }
    }

    fn view_urgent(&mut self) {
        let drained = self.engine.drain_urgent();
        if drained.is_empty() {
            println!("No urgent items.");
        } else {
            println!("Urgent Items:");
            for item in drained {
                println!("{item}");
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("--- Item Management System ---");
    println!("1. Add Item");
    println!("2. View Items");
    println!("3. Delete Item");
    println!("4. Undo Delete");
    println!("5. Search by ID");
    println!("6. Search by Name");
    println!("7. Search by Category");
    println!("8. Save to File");
    println!("9. Load from File");
    println!("10. View Urgent Items");
    println!("11. Exit");
}

/// Print `label` and read one line. Returns `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn render_items(items: &[&ItemRef]) -> String {
    Table::new(items.iter().map(|item| item.as_ref()))
        .with(Style::modern())
        .to_string()
}
