use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd_executor::{CmdExecutor, CommandExecutor},
        msg::Msg,
        route::Route,
        state::State,
        translator::Navigator,
    },
    infrastructure::{
        config::Config,
        tui::{self, Event},
        twitter::{HttpTwitterService, TwitterSettings},
    },
    integration::runtime::Runtime,
    presentation::{config::Action, renderer::Renderer, view::Body},
};

/// Drives the runtime from terminal events and renders its view
pub struct AppRunner {
    config: Config,
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    navigator: Navigator,
    renderer: Renderer,
    needs_render: bool,
    should_quit: bool,
}

impl AppRunner {
    pub fn new(
        config: Config,
        executor: Arc<dyn CommandExecutor>,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Self {
        Self {
            config,
            runtime: Runtime::new(State::initial(), executor),
            tui,
            navigator: Navigator::new(Route::initial()),
            renderer: Renderer::new(),
            needs_render: true,
            should_quit: false,
        }
    }

    /// Wires the HTTP service from `config` to the given terminal
    pub fn new_with_real(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        if !config.has_bearer_token() {
            log::warn!("No bearer token configured; the timeline fetch will fail");
        }
        let service = HttpTwitterService::new(TwitterSettings::from(&config))?;
        let executor = CmdExecutor::new(service, config.avatar_fetch_concurrency);
        Ok(Self::new(config, Arc::new(executor), tui))
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main loop until quit or until the terminal stops producing events
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.dispatcher().dispatch(Msg::ApplicationLaunched);

        let result = self.run_loop().await;

        self.tui.lock().await.exit()?;
        log::info!("Exiting: {:?}", self.runtime.stats());
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            let tui = Arc::clone(&self.tui);
            tokio::select! {
                event = async move { tui.lock().await.next().await } => {
                    match event {
                        Some(event) => self.handle_event(event).await?,
                        None => {
                            log::info!("Terminal event source closed");
                            self.should_quit = true;
                        }
                    }
                }
                Some(msg) = self.runtime.next_message() => {
                    self.runtime.handle(msg);
                }
            }
            self.runtime.process_pending();
            self.render_if_needed().await?;
        }
        Ok(())
    }

    /// Reacts to one terminal event
    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit => self.should_quit = true,
            Event::Render => self.needs_render = true,
            Event::Resize(w, h) => {
                self.tui.lock().await.resize(Rect::new(0, 0, w, h))?;
                self.needs_render = true;
            }
            Event::Key(key) => {
                if let Some(action) = self.config.keybindings.action(&key) {
                    log::debug!("Key {:?} -> {}", key.code, <&'static str>::from(action));
                    self.handle_action(action);
                }
            }
            Event::Error => log::warn!("Terminal reported an input error"),
            Event::Closed => self.should_quit = true,
            Event::Init
            | Event::Tick
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Mouse(_) => {}
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        let view = self.runtime.view();
        let len = match &view.body {
            Body::Timeline(items) => items.len(),
            _ => 0,
        };
        let timeline = self.renderer.timeline_mut();
        let msg = match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::ScrollUp => {
                timeline.scroll_up();
                None
            }
            Action::ScrollDown => {
                timeline.scroll_down(len);
                None
            }
            Action::ScrollToTop => {
                timeline.scroll_to_top();
                None
            }
            Action::ScrollToBottom => {
                timeline.scroll_to_bottom(len);
                None
            }
            Action::Open => timeline
                .selected_tweet(&view)
                .and_then(|id| self.navigator.navigate(Route::Detail(id))),
            Action::Back => self.navigator.back(),
        };
        if let Some(msg) = msg {
            self.runtime.dispatcher().dispatch(msg);
        }
        self.needs_render = true;
    }

    async fn render_if_needed(&mut self) -> Result<()> {
        let requested = self.runtime.take_render_request();
        if !(requested || self.needs_render) {
            return Ok(());
        }
        self.needs_render = false;
        let view = self.runtime.view();
        self.renderer.render(&self.tui, &view).await
    }
}
