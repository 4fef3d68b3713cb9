use std::io::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use meridian::app::App;
use meridian::client::PortalClient;
use meridian::config::{Preferences, Theme};
use meridian::content;
use meridian::models::SettingsInput;
use meridian::view::render;

#[derive(Parser)]
#[command(name = "meridian")]
#[command(about = "Console client for a traditional Chinese medicine knowledge portal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the tag hierarchy and show every surface
    Browse {
        /// Primary category to expand
        #[arg(long)]
        primary: Option<String>,

        /// Secondary tag to activate (shows its detail panel)
        #[arg(long)]
        secondary: Option<String>,
    },
    /// Show the navigation menu
    Nav,
    /// Manage the tag taxonomy
    Tags {
        #[command(subcommand)]
        command: TagsCommand,
    },
    /// Show the reference panel for an organ or body part
    Info { name: String },
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },
    /// Update profile settings
    Settings(SettingsArgs),
    /// Upload a new avatar image
    Avatar { path: PathBuf },
}

#[derive(Subcommand)]
enum TagsCommand {
    /// Show the tag-editor listing
    List,
    /// Add a primary category
    AddPrimary { name: String },
    /// Rename a primary category
    RenamePrimary { old: String, new: String },
    /// Delete a primary category and all its secondary tags
    DeletePrimary {
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a secondary tag under a primary category
    AddSecondary { primary: String, name: String },
    /// Rename a secondary tag
    RenameSecondary {
        primary: String,
        old: String,
        new: String,
    },
    /// Delete a secondary tag
    DeleteSecondary {
        primary: String,
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    Show,
    Light,
    Dark,
    Toggle,
}

#[derive(Args)]
struct SettingsArgs {
    #[arg(long)]
    username: Option<String>,

    #[arg(long)]
    current_password: Option<String>,

    #[arg(long)]
    new_password: Option<String>,

    #[arg(long)]
    confirm_password: Option<String>,

    #[arg(long)]
    email_notifications: bool,
}

/// Initialize tracing to stderr so stdout stays clean for the surfaces.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "meridian=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Ask before a destructive action. Anything but y/Y declines.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}

fn print_notice(app: &App) {
    if let Some(notice) = app.last_notice() {
        println!("{notice}");
    }
}

fn print_surfaces(app: &App) {
    let surfaces = app.surfaces();
    println!("{}", surfaces.editor);
    println!("{}", surfaces.primary_select);
    print!("{}", surfaces.nav_menu);
}

/// Load the hierarchy, exiting with the failure notice when the portal is
/// unreachable. Nothing below makes sense against an unsynced mirror.
async fn load_or_exit(app: &mut App) {
    if !app.load().await {
        print_notice(app);
        std::process::exit(1);
    }
}

/// Shared tail of every tag mutation: notice, fresh surfaces, exit code.
fn finish_mutation(app: &App, ok: bool) {
    print_notice(app);
    if ok {
        print_surfaces(app);
    } else {
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut app = App::new(PortalClient::from_env());

    match cli.command {
        Commands::Browse { primary, secondary } => {
            load_or_exit(&mut app).await;
            if let Some(primary) = primary {
                if !app.select_primary(&primary) {
                    print_notice(&app);
                    std::process::exit(1);
                }
            }
            let panel = match secondary {
                Some(secondary) => match app.select_secondary(&secondary) {
                    Some(panel) => Some(panel),
                    None => {
                        print_notice(&app);
                        std::process::exit(1);
                    }
                },
                None => None,
            };
            print_surfaces(&app);
            if let Some(panel) = panel {
                println!();
                print!("{panel}");
            }
        }
        Commands::Nav => {
            load_or_exit(&mut app).await;
            print!("{}", app.surfaces().nav_menu);
        }
        Commands::Tags { command } => {
            load_or_exit(&mut app).await;
            match command {
                TagsCommand::List => print!("{}", app.surfaces().editor),
                TagsCommand::AddPrimary { name } => {
                    let ok = app.add_primary(&name).await;
                    finish_mutation(&app, ok);
                }
                TagsCommand::RenamePrimary { old, new } => {
                    let ok = app.rename_primary(&old, &new).await;
                    finish_mutation(&app, ok);
                }
                TagsCommand::DeletePrimary { name, yes } => {
                    if !yes && !confirm(&format!("确定要删除\"{name}\"及其所有二级标签吗？"))? {
                        println!("已取消");
                        return Ok(());
                    }
                    let ok = app.delete_primary(&name).await;
                    finish_mutation(&app, ok);
                }
                TagsCommand::AddSecondary { primary, name } => {
                    let ok = app.add_secondary(&primary, &name).await;
                    finish_mutation(&app, ok);
                }
                TagsCommand::RenameSecondary { primary, old, new } => {
                    let ok = app.rename_secondary(&primary, &old, &new).await;
                    finish_mutation(&app, ok);
                }
                TagsCommand::DeleteSecondary { primary, name, yes } => {
                    if !yes && !confirm(&format!("确定要删除\"{name}\"吗？"))? {
                        println!("已取消");
                        return Ok(());
                    }
                    let ok = app.delete_secondary(&primary, &name).await;
                    finish_mutation(&app, ok);
                }
            }
        }
        Commands::Info { name } => {
            print!("{}", render::organ_panel(&name, &content::lookup(&name)));
        }
        Commands::Theme { command } => {
            let mut prefs = Preferences::load();
            let next = match command.unwrap_or(ThemeCommand::Show) {
                ThemeCommand::Show => None,
                ThemeCommand::Light => Some(Theme::Light),
                ThemeCommand::Dark => Some(Theme::Dark),
                ThemeCommand::Toggle => Some(prefs.theme.toggle()),
            };
            if let Some(theme) = next {
                prefs.theme = theme;
                prefs.save()?;
            }
            println!("{}", prefs.theme.as_str());
        }
        Commands::Settings(args) => {
            let input = SettingsInput {
                username: args.username,
                current_password: args.current_password,
                new_password: args.new_password,
                confirm_password: args.confirm_password,
                email_notifications: args.email_notifications,
            };
            match app.update_settings(&input).await {
                Some(username) => {
                    print_notice(&app);
                    if let Some(username) = username {
                        println!("用户名：{username}");
                    }
                }
                None => {
                    print_notice(&app);
                    std::process::exit(1);
                }
            }
        }
        Commands::Avatar { path } => match app.upload_avatar(&path).await {
            Some(url) => {
                print_notice(&app);
                println!("{url}");
            }
            None => {
                print_notice(&app);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
