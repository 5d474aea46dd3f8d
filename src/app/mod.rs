pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::lookup::{LookupQuery, LyricsResult, Resolver};
use crate::storage::Prefs;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use state::{AppState, Focus, Toast};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
    resolver: Resolver,
    prefs_path: std::path::PathBuf,
}

impl App {
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let resolver = Resolver::new(cfg.genius.token.clone());

        // Theme preference is read once at startup and written per toggle.
        let prefs_path = cfg.paths.data_dir.join("prefs.sqlite3");
        let prefs = Prefs::open(&prefs_path)?;

        let mut state = AppState::new();
        state.dark_mode = prefs.dark_mode()?;

        Ok(Self {
            cfg,
            state,
            resolver,
            prefs_path,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        // No constant ticker; we re-render on input and network events.

        // First draw
        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Network(ne) => {
                    self.handle_network(ne);
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::StartLookup => self.spawn_lookup(tx),
            Action::SaveLyrics => self.save_lyrics(),
            Action::ToggleDarkMode => self.toggle_dark_mode(),
            _ => self.reduce(action),
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::SetFocus(f) => self.state.focus = f,
            Action::InputChar(c) => match self.state.focus {
                Focus::Artist => self.state.artist_input.push(c),
                Focus::Song => self.state.song_input.push(c),
                Focus::Results => {}
            },
            Action::Backspace => match self.state.focus {
                Focus::Artist => {
                    self.state.artist_input.pop();
                }
                Focus::Song => {
                    self.state.song_input.pop();
                }
                Focus::Results => {}
            },
            Action::ClearInput => match self.state.focus {
                Focus::Artist => self.state.artist_input.clear(),
                Focus::Song => self.state.song_input.clear(),
                Focus::Results => {}
            },
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::ScrollUp => {
                self.state.lyrics_scroll = self.state.lyrics_scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                let max = self.state.lyrics_line_count().saturating_sub(1);
                self.state.lyrics_scroll = (self.state.lyrics_scroll + 1).min(max);
            }
            Action::ScrollTop => self.state.lyrics_scroll = 0,
            Action::ScrollBottom => {
                self.state.lyrics_scroll = self.state.lyrics_line_count().saturating_sub(1);
            }
            Action::Resize => {
                // Handled by the terminal on the next draw.
            }
            Action::StartLookup | Action::SaveLyrics | Action::ToggleDarkMode => {
                // Handled in handle_action.
            }
        }
    }

    fn spawn_lookup(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(query) = LookupQuery::new(&self.state.artist_input, &self.state.song_input)
        else {
            // Empty field: nothing is issued and nothing changes.
            return;
        };

        // A newer lookup supersedes any still in flight; the superseded
        // completion is dropped by the sequence check in finish_lookup.
        let seq = self.state.begin_lookup(&query);
        self.state.status = format!("Looking up: {} - {}", query.artist(), query.song());

        let resolver = self.resolver.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let resolution = resolver.resolve(&query).await;
            let _ = tx
                .send(Event::Network(NetworkEvent::LookupFinished {
                    seq,
                    resolution,
                }))
                .await;
        });
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::LookupFinished { seq, resolution } => {
                if !self.state.finish_lookup(seq, resolution) {
                    return;
                }

                match self.state.lyrics.as_ref() {
                    Some(LyricsResult::Found { .. }) => {
                        self.state.status = "Lyrics found (Ctrl+s to save)".into();
                        self.state.focus = Focus::Results;
                    }
                    Some(LyricsResult::ExternalLink { .. }) => {
                        self.state.status = "No text in the API; showing an external page".into();
                        self.state.focus = Focus::Results;
                    }
                    Some(LyricsResult::NotFound) => {
                        self.state.status = crate::lookup::NOT_FOUND_MESSAGE.into();
                    }
                    Some(LyricsResult::Error { message }) => {
                        self.state.status = message.clone();
                        self.state.toast = Some(Toast::error(message.clone()));
                    }
                    None => {}
                }
            }
        }
    }

    fn save_lyrics(&mut self) {
        let Some(LyricsResult::Found { text }) = self.state.lyrics.clone() else {
            self.state.toast = Some(Toast::error("No lyrics text to save"));
            return;
        };
        let Some((artist, song)) = self.state.last_query.clone() else {
            return;
        };

        let dir = self.cfg.download_dir();
        match crate::export::write_lyrics_file(&dir, &artist, &song, &text) {
            Ok(path) => {
                self.state.toast = Some(Toast::success(format!("Saved {}", path.display())));
            }
            Err(e) => {
                self.state.toast = Some(Toast::error(format!("Save failed: {e:#}")));
            }
        }
    }

    fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;

        // Persist on every toggle.
        let result = Prefs::open(&self.prefs_path)
            .and_then(|prefs| prefs.set_dark_mode(self.state.dark_mode));
        if let Err(e) = result {
            self.state.toast = Some(Toast::error(format!("Failed to save theme: {e:#}")));
        }
    }
}
