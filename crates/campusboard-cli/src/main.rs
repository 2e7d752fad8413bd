use campusboard::modules::console::{ActionOutcome, ConsoleService};
use campusboard::modules::dashboard::DashboardView;
use campusboard::modules::directory::UserDirectoryService;
use campusboard::modules::menu::{MenuService, ResolvedMenu};
use campusboard::state::{AppState, init_app_state};
use campusboard_cli::seeder::{self, SeedConfig};
use campusboard_config::WorkflowConfig;
use campusboard_models::{MenuEntry, MenuItem, UserId};
use campusboard_store::{KeyValueStore, PreferenceStore, StoreConfig};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "campusboard-cli")]
#[command(about = "Campusboard CLI - Administrative console for Campusboard", long_about = None)]
struct Cli {
    /// Use a seeded in-memory directory and preference store instead of the configured ones
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the navigation menu for a role
    Menu {
        /// Role to resolve (admin, teacher, student); defaults to the last one used
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Highlight the menu item active for this path
        #[arg(short = 'p', long)]
        path: Option<String>,
    },
    /// Show dashboard counts
    Dashboard,
    /// List teacher applications awaiting a decision
    Pending,
    /// Approve a pending teacher
    Approve {
        /// Teacher id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Reject a pending teacher
    Reject {
        /// Teacher id
        id: String,

        /// Reason sent to the user directory (prompted if not provided)
        #[arg(long)]
        reason: Option<String>,

        /// Skip prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Show or change console preferences
    Prefs {
        /// Enable or disable the compact menu
        #[arg(long)]
        compact: Option<bool>,

        /// Forget the remembered role
        #[arg(long)]
        reset_role: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let _log_guards = campusboard_observability::init_tracing();

    let cli = Cli::parse();

    if cli.demo {
        // Demo runs never touch the real preferences.
        let store = match PreferenceStore::connect(&StoreConfig::memory()).await {
            Ok(store) => store,
            Err(e) => {
                eprintln!("❌ Error opening preference store: {}", e);
                std::process::exit(1);
            }
        };
        let directory = seeder::seed_directory(&SeedConfig::default());
        let app = AppState::new(directory, store, WorkflowConfig::from_env());
        println!("🧪 Demo mode: using a seeded in-memory directory");
        run(&app, cli.command).await;
    } else {
        let app = match init_app_state().await {
            Ok(app) => app,
            Err(e) => {
                eprintln!("❌ Error initializing console: {:#}", e);
                std::process::exit(1);
            }
        };
        run(&app, cli.command).await;
    }
}

async fn run<D, S>(app: &AppState<D, S>, command: Commands)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    match command {
        Commands::Menu { role, path } => handle_menu(app, role, path).await,
        Commands::Dashboard => handle_dashboard(app).await,
        Commands::Pending => handle_pending(app).await,
        Commands::Approve { id, yes } => handle_approve(app, UserId::new(id), yes).await,
        Commands::Reject { id, reason, yes } => {
            handle_reject(app, UserId::new(id), reason, yes).await
        }
        Commands::Prefs {
            compact,
            reset_role,
        } => handle_prefs(app, compact, reset_role).await,
    }
}

fn report_last_error<D, S>(app: &AppState<D, S>) {
    if let Some(error) = ConsoleService::last_error(app) {
        eprintln!("⚠️  {}", error);
    }
}

async fn handle_menu<D, S>(app: &AppState<D, S>, role: Option<String>, path: Option<String>)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    let menu = ConsoleService::menu(app, role.as_deref()).await;
    let compact = app.menus.compact_menu().await;
    let active = path
        .as_deref()
        .and_then(|p| MenuService::active_item(menu.entries, p));

    print_menu(&menu, compact, active);
    report_last_error(app);
}

fn print_menu(menu: &ResolvedMenu, compact: bool, active: Option<&MenuItem>) {
    if menu.fell_back {
        println!("⚠️  Unknown role, showing the {} menu", menu.role);
    }
    println!("📋 {} menu", menu.role);

    for entry in menu.entries {
        match entry {
            MenuEntry::Header { label } => {
                if !compact {
                    println!();
                }
                println!("{}", label.to_uppercase());
            }
            MenuEntry::Item(item) => print_item(item, 1, compact, active),
        }
    }
}

fn print_item(item: &MenuItem, depth: usize, compact: bool, active: Option<&MenuItem>) {
    let marker = if active.is_some_and(|a| std::ptr::eq(a, item)) {
        "▶"
    } else {
        "•"
    };
    let indent = "  ".repeat(depth);
    let badge = item.badge.map(|b| format!(" ({})", b)).unwrap_or_default();

    if compact {
        println!("{}{} {}{}", indent, marker, item.title, badge);
        return;
    }

    println!(
        "{}{} {}{}  [{}] {}",
        indent, marker, item.title, badge, item.icon, item.path
    );
    for child in item.children {
        print_item(child, depth + 1, compact, active);
    }
}

async fn handle_dashboard<D, S>(app: &AppState<D, S>)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    match ConsoleService::load_dashboard(app).await {
        DashboardView::Loading => println!("⏳ Still loading..."),
        DashboardView::Ready(summary) => {
            println!("📊 Dashboard");
            println!("   Total users:      {}", summary.total_users);
            println!("   Admins:           {}", summary.admin_count);
            println!("   Teachers:         {}", summary.teacher_count);
            println!("   Students:         {}", summary.student_count);
            println!("   Pending teachers: {}", summary.pending_teacher_count);
        }
    }
    report_last_error(app);
}

async fn handle_pending<D, S>(app: &AppState<D, S>)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    let pending = ConsoleService::load_pending(app).await;

    if pending.is_empty() {
        println!("✅ No teacher applications awaiting a decision");
    } else {
        println!("📝 {} pending teacher application(s)", pending.len());
        for teacher in &pending {
            println!(
                "   {}  {} <{}>  {}  applied {}",
                teacher.id(),
                teacher.user.display_name,
                teacher.user.email,
                teacher.qualification.as_deref().unwrap_or("-"),
                teacher.created_at.format("%Y-%m-%d")
            );
        }
    }
    report_last_error(app);
}

fn confirm(prompt: String) -> bool {
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => answer,
        Err(e) => {
            eprintln!("❌ Error reading confirmation: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_approve<D, S>(app: &AppState<D, S>, id: UserId, yes: bool)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    if !yes && !confirm(format!("Approve teacher {}?", id)) {
        println!("Cancelled");
        return;
    }

    let outcome = ConsoleService::approve(app, &id).await;
    report_outcome(app, &id, "approved", outcome);
}

async fn handle_reject<D, S>(
    app: &AppState<D, S>,
    id: UserId,
    reason: Option<String>,
    yes: bool,
)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    let reason = match (reason, yes) {
        (Some(reason), _) => Some(reason),
        (None, true) => None,
        (None, false) => {
            let input: String = match Input::new()
                .with_prompt("Reason (optional)")
                .allow_empty(true)
                .interact_text()
            {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("❌ Error reading reason: {}", e);
                    std::process::exit(1);
                }
            };
            Some(input).filter(|r| !r.trim().is_empty())
        }
    };

    if !yes && !confirm(format!("Reject teacher {}?", id)) {
        println!("Cancelled");
        return;
    }

    let outcome = ConsoleService::reject(app, &id, reason.as_deref()).await;
    report_outcome(app, &id, "rejected", outcome);
}

fn report_outcome<D, S>(
    app: &AppState<D, S>,
    id: &UserId,
    verb: &str,
    outcome: ActionOutcome,
) {
    match outcome {
        ActionOutcome::AlreadyProcessing => {
            println!("⏳ Teacher {} is already being processed", id);
        }
        ActionOutcome::Settled {
            still_pending: false,
        } => match ConsoleService::last_error(app) {
            None => println!("✅ Teacher {} {}", id, verb),
            Some(error) => {
                eprintln!("⚠️  {}", error);
                println!("ℹ️  Teacher {} is not pending", id);
            }
        },
        ActionOutcome::Settled {
            still_pending: true,
        } => {
            report_last_error(app);
            eprintln!("❌ Teacher {} is still pending", id);
            std::process::exit(1);
        }
        ActionOutcome::Unconfirmed => {
            report_last_error(app);
            eprintln!("❓ Could not confirm whether teacher {} was {}", id, verb);
            std::process::exit(1);
        }
    }
}

async fn handle_prefs<D, S>(app: &AppState<D, S>, compact: Option<bool>, reset_role: bool)
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    if let Some(compact) = compact {
        ConsoleService::set_compact_menu(app, compact).await;
    }
    if reset_role {
        ConsoleService::forget_role(app).await;
    }

    let role = app.menus.current_role().await;
    println!("⚙️  Preferences");
    println!("   Role:         {}", role);
    println!("   Landing page: {}", MenuService::landing_path(role));
    println!("   Compact menu: {}", app.menus.compact_menu().await);
    report_last_error(app);
}
