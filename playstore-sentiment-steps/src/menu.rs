use {
    std::io::Write,
    anyhow::Result,
    tokio::io::{stdin, AsyncBufReadExt, BufReader},
    tracing::info,
    playstore_sentiment_core::{
        session::{Session, View},
        source::{AppMetadataSource, ReviewSource},
    },
    crate::{
        dashboard::{report_failure, Dashboard},
        popular_apps::app_names,
    },
};

const HELP: &str = "\
Commands:
  analyze <app id>   fetch and classify reviews of an app
  analyze            repeat the analysis of the current app
  popular [name]     show details of a popular app
  help               show this message
  quit               leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze(Option<String>),
    Popular(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let argument = if rest.is_empty() { None } else { Some(rest.to_owned()) };

        Some(match name.to_lowercase().as_str() {
            "analyze" | "a" => Command::Analyze(argument),
            "popular" | "p" => Command::Popular(argument),
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(name.to_owned()),
        })
    }
}

pub struct Menu<S> {
    dashboard: Dashboard<S>,
    session: Session,
}

impl<S: ReviewSource + AppMetadataSource> Menu<S> {
    pub fn new(dashboard: Dashboard<S>) -> Self {
        Self {
            dashboard,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut out = std::io::stdout();
        let mut lines = BufReader::new(stdin()).lines();

        write!(out, "{}", HELP)?;
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break,
            };

            let command = match Command::parse(&line) {
                Some(command) => command,
                None => continue,
            };

            if !self.handle(&mut out, command).await? {
                break;
            }
        }

        info!("session finished in {:?} view", self.session().view());
        Ok(())
    }

    /// Applies one command. Returns `false` once the user asked to leave.
    /// Failures are shown to the user and never end the session.
    pub async fn handle<W: Write>(&mut self, out: &mut W, command: Command) -> Result<bool> {
        match command {
            Command::Analyze(Some(app_id)) => match self.session.submit_app_id(&app_id) {
                Ok(app_id) => {
                    let app_id = app_id.to_owned();
                    self.analyze(out, &app_id).await?;
                }
                Err(err) => {
                    report_failure(out, &err.into())?;
                }
            },
            Command::Analyze(None) => {
                self.session.navigate(View::Analysis);
                let app_id = self.session.selected_app().unwrap_or("").to_owned();
                self.analyze(out, &app_id).await?;
            }
            Command::Popular(name) => {
                self.session.navigate(View::PopularApps);
                if let Err(err) = self.dashboard.popular(out, name.as_deref()).await {
                    report_failure(out, &err)?;
                }
            }
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Unknown(name) => {
                writeln!(out, "Unknown command \"{}\". Type help for the list of commands.", name)?;
                writeln!(out, "Popular apps: {}", app_names().join(", "))?;
            }
        }

        Ok(true)
    }

    async fn analyze<W: Write>(&self, out: &mut W, app_id: &str) -> Result<()> {
        if let Err(err) = self.dashboard.analyze(out, app_id).await {
            report_failure(out, &err)?;
        }
        Ok(())
    }
}
