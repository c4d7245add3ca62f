use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use client::{
    ApiClient, ApiError, ClaimStatus, NewOfficer, NewProposal, NewUser, PolicySummary, Role, Session, SessionError,
    UpdateUser,
};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("session file error: {0}")]
    Session(#[from] SessionError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unknown role `{0}`; expected user, officer, or admin")]
    UnknownRole(String),
    #[error("unknown claim status `{0}`; expected PENDING, UNDER_REVIEW, APPROVED, or REJECTED")]
    UnknownStatus(String),
    #[error("not logged in; run `autosure login` first")]
    NotLoggedIn,
    #[error("this command requires the {0} role")]
    RoleRequired(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "autosure", about = "Autosure insurance API CLI")]
struct Cli {
    #[arg(long, env = "AUTOSURE_BASE_URL", default_value = "http://127.0.0.1:8888")]
    base_url: String,

    #[arg(long, env = "AUTOSURE_SESSION_FILE", help = "Session file path; defaults to ~/.config/autosure/session.json")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Register(RegisterArgs),
    Login(LoginArgs),
    Logout,
    Whoami,
    Dashboard,
    Proposal(ProposalCommand),
    Payment(PaymentCommand),
    Claim(ClaimCommand),
    Profile(ProfileCommand),
    User(UserCommand),
    Officer(OfficerCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    #[arg(long)]
    address: String,

    #[arg(long, help = "Date of birth, YYYY-MM-DD")]
    date_of_birth: String,

    #[arg(long)]
    aadhaar_number: String,

    #[arg(long)]
    pan_number: String,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    #[arg(long, default_value = "user", help = "Account table to check: user, officer, or admin")]
    user_type: String,
}

#[derive(Args, Debug)]
struct ProposalCommand {
    #[command(subcommand)]
    command: ProposalSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProposalSubcommand {
    Submit {
        #[arg(long)]
        vehicle_type: String,

        #[arg(long)]
        vehicle_number: String,

        #[arg(long = "package")]
        policy_package: String,

        #[arg(long, help = "Policyholder id; defaults to the logged-in user")]
        user_id: Option<Uuid>,
    },
    List {
        #[arg(long, help = "One policyholder's proposals; officers without this see all")]
        user_id: Option<Uuid>,
    },
    Show {
        proposal_id: Uuid,
    },
    Delete {
        proposal_id: Uuid,
    },
    Packages,
}

#[derive(Args, Debug)]
struct PaymentCommand {
    #[command(subcommand)]
    command: PaymentSubcommand,
}

#[derive(Subcommand, Debug)]
enum PaymentSubcommand {
    Pay {
        proposal_id: Uuid,

        #[arg(long, default_value = "card")]
        method: String,
    },
    History {
        #[arg(long, help = "Policyholder id; defaults to the logged-in user")]
        user_id: Option<Uuid>,
    },
}

#[derive(Args, Debug)]
struct ClaimCommand {
    #[command(subcommand)]
    command: ClaimSubcommand,
}

#[derive(Subcommand, Debug)]
enum ClaimSubcommand {
    File {
        proposal_id: Uuid,

        #[arg(long)]
        reason: String,

        #[arg(long, help = "Policyholder id; defaults to the logged-in user")]
        user_id: Option<Uuid>,
    },
    List {
        #[arg(long, help = "One policyholder's claims; officers without this see all")]
        user_id: Option<Uuid>,
    },
    ShowAll,
    Approve {
        claim_id: Uuid,
    },
    Reject {
        claim_id: Uuid,
    },
    SetStatus {
        claim_id: Uuid,
        status: String,
    },
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long, help = "Date of birth, YYYY-MM-DD")]
        date_of_birth: Option<String>,

        #[arg(long)]
        aadhaar_number: Option<String>,

        #[arg(long)]
        pan_number: Option<String>,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List,
    Show {
        user_id: Uuid,
    },
    Delete {
        user_id: Uuid,
    },
}

#[derive(Args, Debug)]
struct OfficerCommand {
    #[command(subcommand)]
    command: OfficerSubcommand,
}

#[derive(Subcommand, Debug)]
enum OfficerSubcommand {
    List,
    Show {
        officer_id: Uuid,
    },
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value_t = false, help = "Grant the ADMIN role instead of OFFICER")]
        admin: bool,
    },
    Delete {
        officer_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let session_path = cli.session_file.clone().unwrap_or_else(Session::default_path);
    let session = Session::load(&session_path)?;
    let mut client = ApiClient::new(&cli.base_url, session);

    match cli.command {
        Command::Ping => run_ping(&client).await,
        Command::Register(args) => run_register(&client, args).await,
        Command::Login(args) => run_login(&mut client, &session_path, args).await,
        Command::Logout => run_logout(&mut client, &session_path),
        Command::Whoami => run_whoami(&client).await,
        Command::Dashboard => run_dashboard(&client).await,
        Command::Proposal(proposal) => run_proposal(&client, proposal).await,
        Command::Payment(payment) => run_payment(&client, payment).await,
        Command::Claim(claim) => run_claim(&client, claim).await,
        Command::Profile(profile) => run_profile(&client, profile).await,
        Command::User(user) => run_user(&client, user).await,
        Command::Officer(officer) => run_officer(&client, officer).await,
    }
}

async fn run_ping(client: &ApiClient) -> Result<(), CliError> {
    client.health().await?;
    println!("ok");
    Ok(())
}

async fn run_register(client: &ApiClient, args: RegisterArgs) -> Result<(), CliError> {
    let new_user = NewUser {
        name: args.name,
        email: args.email,
        password: args.password,
        address: args.address,
        date_of_birth: args.date_of_birth,
        aadhaar_number: args.aadhaar_number,
        pan_number: args.pan_number,
    };
    let outcome = client.register_user(&new_user).await?;
    println!("{outcome}");
    Ok(())
}

async fn run_login(client: &mut ApiClient, session_path: &std::path::Path, args: LoginArgs) -> Result<(), CliError> {
    let user_type = Role::from_str(&args.user_type).ok_or_else(|| CliError::UnknownRole(args.user_type.clone()))?;

    let outcome = client.login(&args.email, &args.password, user_type).await?;
    client.session().save(session_path)?;
    println!("Logged in as {} ({})", outcome.email, outcome.role.as_str());
    Ok(())
}

fn run_logout(client: &mut ApiClient, session_path: &std::path::Path) -> Result<(), CliError> {
    client.session_mut().log_out();
    Session::remove(session_path)?;
    println!("Logged out");
    Ok(())
}

async fn run_whoami(client: &ApiClient) -> Result<(), CliError> {
    require_login(client)?;
    let outcome = client.validate().await?;
    println!("{} ({})", outcome.email, outcome.role.as_str());
    Ok(())
}

async fn run_dashboard(client: &ApiClient) -> Result<(), CliError> {
    require_login(client)?;

    if client.session().has_role(Role::Officer) {
        let stats = client.dashboard_stats().await?;
        print_json(&serde_json::to_value(&stats)?)?;
        return Ok(());
    }

    let me = client.me().await?;
    let proposals = client.user_proposals(me.id).await?;
    let summary = PolicySummary::from_proposals(&proposals);
    println!(
        "{} policies, {} active, total premium {:.2}",
        summary.total_policies, summary.active_policies, summary.total_premium
    );
    print_json(&serde_json::to_value(&proposals)?)?;
    Ok(())
}

async fn run_proposal(client: &ApiClient, proposal: ProposalCommand) -> Result<(), CliError> {
    match proposal.command {
        ProposalSubcommand::Submit {
            vehicle_type,
            vehicle_number,
            policy_package,
            user_id,
        } => {
            require_login(client)?;
            let user_id = resolve_user_id(client, user_id).await?;
            let new_proposal = NewProposal {
                vehicle_type,
                vehicle_number,
                policy_package,
            };
            let stored = client.submit_proposal(user_id, &new_proposal).await?;
            print_json(&serde_json::to_value(&stored)?)?;
            Ok(())
        }
        ProposalSubcommand::List { user_id } => {
            require_login(client)?;
            let proposals = match user_id {
                Some(id) => client.user_proposals(id).await?,
                None if client.session().has_role(Role::Officer) => client.list_proposals().await?,
                None => {
                    let me = client.me().await?;
                    client.user_proposals(me.id).await?
                }
            };
            print_json(&serde_json::to_value(&proposals)?)?;
            Ok(())
        }
        ProposalSubcommand::Show { proposal_id } => {
            require_login(client)?;
            let stored = client.get_proposal(proposal_id).await?;
            print_json(&serde_json::to_value(&stored)?)?;
            Ok(())
        }
        ProposalSubcommand::Delete { proposal_id } => {
            require_login(client)?;
            let outcome = client.delete_proposal(proposal_id).await?;
            println!("{outcome}");
            Ok(())
        }
        ProposalSubcommand::Packages => {
            print_json(&policy_packages())?;
            Ok(())
        }
    }
}

async fn run_payment(client: &ApiClient, payment: PaymentCommand) -> Result<(), CliError> {
    match payment.command {
        PaymentSubcommand::Pay { proposal_id, method } => {
            require_login(client)?;
            let stored = client.process_payment(proposal_id, Some(&method)).await?;
            print_json(&serde_json::to_value(&stored)?)?;
            Ok(())
        }
        PaymentSubcommand::History { user_id } => {
            require_login(client)?;
            let user_id = resolve_user_id(client, user_id).await?;
            let history = client.payment_history(user_id).await?;
            print_json(&serde_json::to_value(&history)?)?;
            Ok(())
        }
    }
}

async fn run_claim(client: &ApiClient, claim: ClaimCommand) -> Result<(), CliError> {
    match claim.command {
        ClaimSubcommand::File {
            proposal_id,
            reason,
            user_id,
        } => {
            require_login(client)?;
            let user_id = resolve_user_id(client, user_id).await?;
            let stored = client.file_claim(user_id, proposal_id, &reason).await?;
            print_json(&serde_json::to_value(&stored)?)?;
            Ok(())
        }
        ClaimSubcommand::List { user_id } => {
            require_login(client)?;
            let claims = match user_id {
                Some(id) => client.user_claims(id).await?,
                None if client.session().has_role(Role::Officer) => client.list_claims().await?,
                None => {
                    let me = client.me().await?;
                    client.user_claims(me.id).await?
                }
            };
            print_json(&serde_json::to_value(&claims)?)?;
            Ok(())
        }
        ClaimSubcommand::ShowAll => {
            require_role(client, Role::Officer)?;
            let claims = client.list_claims().await?;
            print_json(&serde_json::to_value(&claims)?)?;
            Ok(())
        }
        ClaimSubcommand::Approve { claim_id } => {
            require_role(client, Role::Officer)?;
            let outcome = client.set_claim_status(claim_id, ClaimStatus::Approved).await?;
            println!("{outcome}");
            Ok(())
        }
        ClaimSubcommand::Reject { claim_id } => {
            require_role(client, Role::Officer)?;
            let outcome = client.set_claim_status(claim_id, ClaimStatus::Rejected).await?;
            println!("{outcome}");
            Ok(())
        }
        ClaimSubcommand::SetStatus { claim_id, status } => {
            require_role(client, Role::Officer)?;
            let status = ClaimStatus::from_str(&status).ok_or_else(|| CliError::UnknownStatus(status.clone()))?;
            let outcome = client.set_claim_status(claim_id, status).await?;
            println!("{outcome}");
            Ok(())
        }
    }
}

async fn run_profile(client: &ApiClient, profile: ProfileCommand) -> Result<(), CliError> {
    match profile.command {
        ProfileSubcommand::Show => {
            require_login(client)?;
            let me = client.me().await?;
            print_json(&serde_json::to_value(&me)?)?;
            Ok(())
        }
        ProfileSubcommand::Update {
            name,
            email,
            address,
            date_of_birth,
            aadhaar_number,
            pan_number,
        } => {
            require_login(client)?;
            let me = client.me().await?;
            let update = UpdateUser {
                name,
                email,
                address,
                date_of_birth,
                aadhaar_number,
                pan_number,
            };
            let updated = client.update_user(me.id, &update).await?;
            print_json(&serde_json::to_value(&updated)?)?;
            Ok(())
        }
    }
}

async fn run_user(client: &ApiClient, user: UserCommand) -> Result<(), CliError> {
    match user.command {
        UserSubcommand::List => {
            require_role(client, Role::Officer)?;
            let users = client.list_users().await?;
            print_json(&serde_json::to_value(&users)?)?;
            Ok(())
        }
        UserSubcommand::Show { user_id } => {
            require_login(client)?;
            let stored = client.get_user(user_id).await?;
            print_json(&serde_json::to_value(&stored)?)?;
            Ok(())
        }
        UserSubcommand::Delete { user_id } => {
            require_role(client, Role::Admin)?;
            let outcome = client.delete_user(user_id).await?;
            println!("{outcome}");
            Ok(())
        }
    }
}

async fn run_officer(client: &ApiClient, officer: OfficerCommand) -> Result<(), CliError> {
    match officer.command {
        OfficerSubcommand::List => {
            require_role(client, Role::Officer)?;
            let officers = client.list_officers().await?;
            print_json(&serde_json::to_value(&officers)?)?;
            Ok(())
        }
        OfficerSubcommand::Show { officer_id } => {
            require_role(client, Role::Officer)?;
            let stored = client.get_officer(officer_id).await?;
            print_json(&serde_json::to_value(&stored)?)?;
            Ok(())
        }
        OfficerSubcommand::Register {
            name,
            email,
            password,
            admin,
        } => {
            require_role(client, Role::Admin)?;
            let new_officer = NewOfficer {
                name,
                email,
                password,
                role: if admin { Role::Admin } else { Role::Officer },
            };
            let outcome = client.register_officer(&new_officer).await?;
            println!("{outcome}");
            Ok(())
        }
        OfficerSubcommand::Delete { officer_id } => {
            require_role(client, Role::Admin)?;
            client.delete_officer(officer_id).await?;
            println!("Officer deleted");
            Ok(())
        }
    }
}

fn require_login(client: &ApiClient) -> Result<(), CliError> {
    if client.session().is_authenticated() {
        Ok(())
    } else {
        Err(CliError::NotLoggedIn)
    }
}

/// Fail fast before the request; the server still enforces the same rule.
fn require_role(client: &ApiClient, required: Role) -> Result<(), CliError> {
    require_login(client)?;
    if client.session().has_role(required) {
        Ok(())
    } else {
        Err(CliError::RoleRequired(required.as_str()))
    }
}

async fn resolve_user_id(client: &ApiClient, explicit: Option<Uuid>) -> Result<Uuid, CliError> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    let me = client.me().await?;
    Ok(me.id)
}

/// Advertised rate card shown by `proposal packages`. Display copy only;
/// the server computes real premiums from vehicle and package rates.
fn policy_packages() -> Value {
    serde_json::json!([
        {
            "name": "Basic Third Party",
            "description": "Covers third-party liability only",
            "price": 3000,
            "features": ["Third Party Liability", "Legal Compliance", "Accident Cover"]
        },
        {
            "name": "Comprehensive",
            "description": "Complete protection for your vehicle",
            "price": 6000,
            "features": ["Own Damage Cover", "Third Party Liability", "Theft Protection", "Natural Calamity Cover"]
        },
        {
            "name": "Comprehensive Plus",
            "description": "Enhanced coverage with additional benefits",
            "price": 8000,
            "features": ["All Comprehensive Features", "Zero Depreciation", "Roadside Assistance", "Engine Protection"]
        },
        {
            "name": "Premium",
            "description": "Luxury vehicle protection",
            "price": 10000,
            "features": ["All Plus Features", "Return to Invoice", "NCB Protection", "Key Replacement"]
        }
    ])
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
