//! Keyboard input handling and interactive loop.

use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use drilltree::domain::ports::{FolderStore, ViewTreeProvider};

use crate::ui::views::tree::TreeStyle;

use super::menu::{InputMode, SidebarAction, SidebarMenu};
use super::render::render_menu;

/// Wake-up interval when no search is pending
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Convert a keyboard event to a SidebarAction
pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Option<SidebarAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(SidebarAction::Quit);
    }

    match mode {
        InputMode::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(SidebarAction::EndSearch),
            KeyCode::Backspace => Some(SidebarAction::Erase),
            KeyCode::Up => Some(SidebarAction::Up),
            KeyCode::Down => Some(SidebarAction::Down),
            KeyCode::Char(c) => Some(SidebarAction::Type(c)),
            _ => None,
        },
        InputMode::FolderName => match key.code {
            KeyCode::Esc => Some(SidebarAction::EndSearch),
            KeyCode::Enter => Some(SidebarAction::Submit),
            KeyCode::Backspace => Some(SidebarAction::Erase),
            KeyCode::Char(c) => Some(SidebarAction::Type(c)),
            _ => None,
        },
        InputMode::Navigate => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(SidebarAction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(SidebarAction::Down),
            KeyCode::Enter
            | KeyCode::Char(' ')
            | KeyCode::Right
            | KeyCode::Left
            | KeyCode::Char('l')
            | KeyCode::Char('h') => Some(SidebarAction::Toggle),
            KeyCode::Char('/') => Some(SidebarAction::StartSearch),
            KeyCode::Tab => Some(SidebarAction::Menu("recycle")),
            KeyCode::BackTab | KeyCode::Backspace => Some(SidebarAction::Menu("back")),
            KeyCode::Char('f') => Some(SidebarAction::Menu("fold")),
            KeyCode::Char('a') => Some(SidebarAction::Menu("view")),
            KeyCode::Char('n') => Some(SidebarAction::StartFolder),
            KeyCode::Char('q') | KeyCode::Esc => Some(SidebarAction::Quit),
            _ => None,
        },
    }
}

/// Run the sidebar interactively until the user quits
pub fn run_interactive<W>(menu: &mut SidebarMenu<W>, style: TreeStyle) -> anyhow::Result<()>
where
    W: ViewTreeProvider + FolderStore,
{
    use crossterm::{
        cursor, execute,
        terminal::{self, ClearType},
    };

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, cursor::Hide)?;

    let result = event_loop(menu, style);

    menu.close();
    execute!(
        out,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop<W>(menu: &mut SidebarMenu<W>, style: TreeStyle) -> anyhow::Result<()>
where
    W: ViewTreeProvider + FolderStore,
{
    use crossterm::event::{self, Event, KeyEventKind};

    draw(menu, &style)?;

    loop {
        let timeout = menu.next_due(Instant::now()).unwrap_or(IDLE_POLL);
        let mut redraw = false;

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = key_to_action(key, menu.mode()) {
                        if menu.handle_action(action, Instant::now())? {
                            return Ok(());
                        }
                        redraw = true;
                    }
                }
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        if menu.tick(Instant::now()) {
            redraw = true;
        }
        if redraw {
            draw(menu, &style)?;
        }
    }
}

fn draw<W>(menu: &SidebarMenu<W>, style: &TreeStyle) -> std::io::Result<()>
where
    W: ViewTreeProvider + FolderStore,
{
    use crossterm::{
        cursor, execute,
        terminal::{self, ClearType},
    };

    let mut out = stdout();
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in render_menu(menu, style, Instant::now()).lines() {
        write!(out, "{}\r\n", line)?;
    }
    out.flush()
}
