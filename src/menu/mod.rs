//! Numbered-choice menu engine
//!
//! A menu renders its title, its items numbered from 1, and a reserved `0`
//! entry that leaves the menu. The user answers with a number and the menu
//! dispatches the matching command tag. Submenus nest by running their own
//! loop inside a dispatched command, so the call stack is the navigation
//! stack and returning from the function is "go back".

pub mod console;
pub mod screens;

pub use console::Console;

use std::io::{BufRead, Write};

use crate::error::CirculateResult;

/// Message shown for a non-numeric or out-of-range choice
const INVALID_CHOICE: &str = "Not valid input!";

/// One selectable entry: a label and the command it dispatches
struct MenuItem<A> {
    label: String,
    command: A,
}

/// A titled, numbered-choice menu over a fixed command set
///
/// The command type is a plain `Copy` tag enum; behavior lives in the
/// dispatch closure handed to [`Menu::run`], which keeps menus data and
/// screens logic.
pub struct Menu<A> {
    title: String,
    exit_label: &'static str,
    items: Vec<MenuItem<A>>,
}

impl<A: Copy> Menu<A> {
    /// Create an empty menu; `exit_label` names choice `0` ("Back", "Exit")
    pub fn new(title: impl Into<String>, exit_label: &'static str) -> Self {
        Self {
            title: title.into(),
            exit_label,
            items: Vec::new(),
        }
    }

    /// Append an item; its position in the list is its 1-based choice number
    pub fn item(mut self, label: impl Into<String>, command: A) -> Self {
        self.items.push(MenuItem {
            label: label.into(),
            command,
        });
        self
    }

    /// Run the choice loop until the user picks `0`
    ///
    /// Every dispatched command runs behind an error boundary: an error
    /// coming back from `dispatch` is reported on the console and the loop
    /// re-renders, so one failed operation never tears down the session.
    /// Console failures themselves do propagate.
    pub fn run<R, W, F>(&self, console: &mut Console<R, W>, mut dispatch: F) -> CirculateResult<()>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&mut Console<R, W>, A) -> CirculateResult<()>,
    {
        loop {
            self.render(console)?;
            let answer = console.read()?;

            match answer.trim().parse::<usize>() {
                Ok(0) => return Ok(()),
                Ok(choice) if choice <= self.items.len() => {
                    let command = self.items[choice - 1].command;
                    if let Err(err) = dispatch(console, command) {
                        console.say(&format!("Error: {}", err))?;
                    }
                }
                _ => console.say(INVALID_CHOICE)?,
            }
        }
    }

    fn render<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> CirculateResult<()> {
        console.say(&self.title)?;
        for (i, item) in self.items.iter().enumerate() {
            console.say(&format!("{}. {}", i + 1, item.label))?;
        }
        console.say(&format!("0. {}", self.exit_label))
    }
}
