//! Interactive line-oriented session
//!
//! Reads commands from any `BufRead` and writes prompts and results to any
//! `Write`, so the whole loop can be driven from tests. End of input behaves
//! like `exit`.

use crate::calendar::{Task, TaskFilter, TaskKind, TaskStore, sorted_by_type};
use crate::clock::Clock;
use crate::formatting::{format_numbered, format_tasks};
use crate::storage::Storage;
use crate::validation::{
    is_valid_birthday, is_valid_note_datetime, matches_birthday_shape, matches_note_shape,
    parse_birthday,
};
use anyhow::Result;
use log::{error, info};
use std::io::{BufRead, Write};

struct Io<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Io<R, W> {
    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }
}

/// An interactive session over one task collection
pub struct Session<C: Clock> {
    store: TaskStore,
    storage: Option<Storage>,
    clock: C,
}

impl<C: Clock> Session<C> {
    /// Create a session
    ///
    /// # Arguments
    /// * `store` - Initial task collection
    /// * `storage` - Where to save after each change; `None` keeps it in memory
    /// * `clock` - Source of the current local time
    pub fn new(store: TaskStore, storage: Option<Storage>, clock: C) -> Self {
        Self {
            store,
            storage,
            clock,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run the command loop until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let mut io = Io { input, output };

        io.say("Current date and time:")?;
        io.say(self.clock.now().format("%Y-%m-%d %H:%M").to_string())?;

        loop {
            let Some(command) = io.prompt("Enter the command (add, view, sort, delete, exit): ")?
            else {
                break;
            };
            match command.to_lowercase().as_str() {
                "add" => self.add(&mut io)?,
                "view" => self.view(&mut io)?,
                "sort" => self.sort(&mut io)?,
                "delete" => self.delete(&mut io)?,
                "exit" => {
                    io.say("Goodbye!")?;
                    break;
                }
                _ => io.say("Incorrect command")?,
            }
        }
        Ok(())
    }

    /// Persist the collection, telling the user when it could not be written
    fn save<R: BufRead, W: Write>(&self, io: &mut Io<R, W>) -> Result<()> {
        if let Some(storage) = &self.storage
            && let Err(e) = storage.save(&self.store)
        {
            error!("Failed to save {}: {:#}", storage.path().display(), e);
            io.say(format!(
                "Failed to save changes to {}",
                storage.path().display()
            ))?;
        }
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, io: &mut Io<R, W>) -> Result<()> {
        let Some(kind) = io.prompt("Specify type (note, birthday):")? else {
            return Ok(());
        };
        let kind = match kind.to_lowercase().parse::<TaskKind>() {
            Ok(kind) => kind,
            Err(_) => return io.say("Incorrect type"),
        };

        let question = match kind {
            TaskKind::Note => "How many notes would you like to add: ",
            TaskKind::Birthday => "How many dates of birth would you like to add: ",
        };
        let count = loop {
            let Some(answer) = io.prompt(question)? else {
                return Ok(());
            };
            match answer.parse::<u32>() {
                Ok(n) if n > 0 => break n,
                _ => io.say("Incorrect number")?,
            }
        };

        let mut added = Vec::new();
        for i in 1..=count {
            let Some(task) = self.read_task(io, kind, i)? else {
                break;
            };
            if let Some(task) = task {
                added.push(task);
            }
        }

        if added.is_empty() {
            return Ok(());
        }
        for task in &added {
            self.store.add(task.clone());
        }
        info!("Added {} {}(s)", added.len(), kind);
        self.save(io)?;
        write!(io.output, "{}", format_tasks(&added))?;
        Ok(())
    }

    /// Read one task; the outer `None` means end of input, the inner one a
    /// rejected item
    fn read_task<R: BufRead, W: Write>(
        &self,
        io: &mut Io<R, W>,
        kind: TaskKind,
        position: u32,
    ) -> Result<Option<Option<Task>>> {
        let (question, label_question) = match kind {
            TaskKind::Note => (
                format!("{position}. Enter datetime in \"YYYY-MM-DD HH:MM\" format:"),
                "Enter text:",
            ),
            TaskKind::Birthday => (
                format!("{position}. Enter date of birth in \"YYYY-MM-DD\" format: "),
                "Enter name:",
            ),
        };

        let input = loop {
            let Some(input) = io.prompt(&question)? else {
                return Ok(None);
            };
            let (shape_ok, values_ok) = match kind {
                TaskKind::Note => (matches_note_shape(&input), is_valid_note_datetime(&input)),
                TaskKind::Birthday => (matches_birthday_shape(&input), is_valid_birthday(&input)),
            };
            if !shape_ok {
                io.say("Incorrect format")?;
            } else if !values_ok {
                io.say("Incorrect date or time values")?;
            } else {
                break input;
            }
        };

        let Some(label) = io.prompt(label_question)? else {
            return Ok(None);
        };

        let created = match kind {
            TaskKind::Note => Task::note(&input, &label, self.clock.now()),
            TaskKind::Birthday => Task::birthday(&input, &label, self.clock.today()),
        };
        match created {
            Ok(task) => Ok(Some(Some(task))),
            Err(e) => {
                io.say(e.to_string())?;
                Ok(Some(None))
            }
        }
    }

    fn view<R: BufRead, W: Write>(&self, io: &mut Io<R, W>) -> Result<()> {
        let criterion = 'select: loop {
            let Some(name) = io.prompt("Specify filter (all, date, text, birthdays, notes): ")?
            else {
                return Ok(());
            };
            match name.as_str() {
                "all" => break TaskFilter::All,
                "birthdays" => break TaskFilter::Kind(TaskKind::Birthday),
                "notes" => break TaskFilter::Kind(TaskKind::Note),
                "text" => {
                    let Some(text) = io.prompt("Enter text: ")? else {
                        return Ok(());
                    };
                    break TaskFilter::Text(text);
                }
                "date" => loop {
                    let Some(date) = io.prompt("Enter date in \"YYYY-MM-DD\" format: ")? else {
                        return Ok(());
                    };
                    match parse_birthday(&date) {
                        Some(date) => break 'select TaskFilter::Date(date),
                        None => io.say("Incorrect date or time values")?,
                    }
                },
                _ => io.say("Incorrect type")?,
            }
        };

        let found = sorted_by_type(self.store.filter_as_of(&criterion, self.clock.today()));
        if found.is_empty() {
            return io.say("No tasks to display");
        }
        write!(io.output, "{}", format_tasks(found))?;
        Ok(())
    }

    fn sort<R: BufRead, W: Write>(&mut self, io: &mut Io<R, W>) -> Result<()> {
        loop {
            let Some(key) = io.prompt("Sort by (type, remaining): ")? else {
                return Ok(());
            };
            match key.to_lowercase().as_str() {
                "type" => {
                    self.store.sort_by_type();
                    break;
                }
                "remaining" => {
                    let ascending = loop {
                        let Some(order) = io.prompt("Order (asc, desc): ")? else {
                            return Ok(());
                        };
                        match order.to_lowercase().as_str() {
                            "asc" => break true,
                            "desc" => break false,
                            _ => io.say("Incorrect order")?,
                        }
                    };
                    self.store.sort_by_remaining(ascending);
                    break;
                }
                _ => io.say("Incorrect type")?,
            }
        }

        self.save(io)?;
        if self.store.is_empty() {
            return io.say("No tasks to display");
        }
        write!(io.output, "{}", format_tasks(&self.store))?;
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(&mut self, io: &mut Io<R, W>) -> Result<()> {
        if self.store.is_empty() {
            return io.say("No tasks to delete");
        }

        let order = self.store.display_order();
        let shown = order.iter().filter_map(|&i| self.store.get(i));
        write!(io.output, "{}", format_numbered(shown))?;

        let Some(answer) = io.prompt("Enter the numbers of the tasks to delete: ")? else {
            return Ok(());
        };
        let tokens: Vec<&str> = answer
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let removed = self.store.delete_by_indices(&tokens, &order);
        if !removed.is_empty() {
            info!("Deleted {} task(s)", removed.len());
            self.save(io)?;
        }
        io.say(format!("Deleted {} task(s)", removed.len()))
    }
}
