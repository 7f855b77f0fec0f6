//src/main.rs

use std::process::ExitCode;

use anyhow::Context;
use chrono::{Datelike, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use gestao_rh::{
    AppConfig, AppError, AppState, Route,
    common::dates,
    models::{
        auth::LoginPayload, company::CompanyPayload, employee::EmployeePayload,
        notification::NotificationPayload,
    },
    services::{employee_service, upload},
    store::SelectionStore,
    viewmodels::{EmployeeFilter, NotificationFilter},
};

use crate::cli::{
    Cli, Command, DescricoesCommand, EmpresasCommand, FuncionariosCommand, NotificacoesCommand,
    UsuariosCommand,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env().context("Falha ao carregar a configuração.")?;
    let mut selection = SelectionStore::open(&config.data_dir);
    let app_state = AppState::new(config).context("Falha ao inicializar o cliente.")?;

    match run(&app_state, &mut selection, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            let err = app_state.auth_service.handle_error(err).await;
            let feedback = err.to_feedback();

            eprintln!("❌ {}", feedback.message);
            for (field, messages) in &feedback.fields {
                for message in messages {
                    eprintln!("   - {}: {}", field, message);
                }
            }
            if feedback.redirect == Some(Route::Login) {
                eprintln!("Execute `gestao-rh login --login <usuario>` para entrar novamente.");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(
    state: &AppState,
    selection: &mut SelectionStore,
    command: Command,
) -> Result<(), AppError> {
    // Login e logout são os únicos comandos que não exigem sessão
    match command {
        Command::Login { login, senha } => {
            let payload = LoginPayload {
                login,
                password: senha,
            };
            let user = state.auth_service.login(&payload).await?;
            match user {
                Some(user) => println!("Bem-vindo, {}!", user.name),
                None => println!("Login realizado."),
            }
            return Ok(());
        }
        Command::Logout => {
            // Sessão vencida não impede o logout local
            let _ = state.auth_service.restore().await;
            state.auth_service.logout().await?;
            selection.clear()?;
            println!("Sessão encerrada.");
            return Ok(());
        }
        _ => {}
    }

    state.auth_service.restore().await?;

    match command {
        Command::Login { .. } | Command::Logout => Ok(()),
        Command::Empresas(cmd) => empresas(state, selection, cmd).await,
        Command::Funcionarios(cmd) => funcionarios(state, selection, cmd).await,
        Command::Aniversariantes { empresa, mes } => {
            let company_id = selection.current().company_or(empresa)?;
            let month = mes.unwrap_or_else(|| Local::now().month());
            let employees = state.employee_service.list(company_id).await?;

            println!(
                "Aniversariantes de {}:",
                dates::month_name(month).unwrap_or("?")
            );
            for e in employee_service::birthdays_in_month(&employees, month) {
                println!("  {:02} - {}", e.birth_date.day(), e.name);
            }
            Ok(())
        }
        Command::Descricoes(DescricoesCommand::Listar { empresa }) => {
            let company_id = selection.current().company_or(empresa)?;
            for d in state.description_service.list(company_id).await? {
                println!("[{}] {} / {}", d.id, d.sector, d.role);
                if let Some(responsibilities) = &d.responsibilities {
                    println!("    {}", responsibilities);
                }
            }
            Ok(())
        }
        Command::Usuarios(cmd) => usuarios(state, cmd).await,
        Command::Notificacoes(cmd) => notificacoes(state, selection, cmd).await,
    }
}

async fn empresas(
    state: &AppState,
    selection: &mut SelectionStore,
    cmd: EmpresasCommand,
) -> Result<(), AppError> {
    match cmd {
        EmpresasCommand::Listar => {
            let current = selection.company_id();
            for c in state.company_service.list().await? {
                let marker = if current == Some(c.id) { "*" } else { " " };
                println!("{} [{}] {} ({})", marker, c.id, c.name, c.tax_id);
            }
        }
        EmpresasCommand::Criar { nome, cnpj, cor } => {
            let payload = CompanyPayload {
                name: nome,
                tax_id: cnpj,
                color: cor,
            };
            let company = state.company_service.create(&payload).await?;
            println!("Empresa cadastrada com sucesso! (id {})", company.id);
        }
        EmpresasCommand::Selecionar { id } => {
            let company = state.company_service.get(id).await?;
            selection.select_company(company.id)?;
            println!("Empresa atual: {}", company.name);
        }
        EmpresasCommand::Logo { id, arquivo } => {
            let max = state.config.upload_limits.max_image_bytes;
            let (file_name, bytes) = upload::read_file(&arquivo, max).await?;
            state
                .company_service
                .upload_logo(id, &file_name, bytes)
                .await?;
            println!("Logo atualizado.");
        }
    }
    Ok(())
}

async fn funcionarios(
    state: &AppState,
    selection: &mut SelectionStore,
    cmd: FuncionariosCommand,
) -> Result<(), AppError> {
    match cmd {
        FuncionariosCommand::Listar(args) => {
            let company_id = selection.current().company_or(args.empresa)?;
            let employees = state.employee_service.list(company_id).await?;

            let filter = EmployeeFilter {
                name: args.nome.unwrap_or_default(),
                sex: args.sexo,
                sector: args.setor,
                role: args.cargo,
                level: args.nivel,
                birth_month: args.mes,
            };
            let visible = filter.apply(&employees);
            for e in &visible {
                println!(
                    "[{}] {} - {} / {} ({})",
                    e.id,
                    e.name,
                    e.sector,
                    e.role,
                    e.sex.label()
                );
            }
            println!("{} de {} funcionários", visible.len(), employees.len());
        }
        FuncionariosCommand::Ver { id } => {
            let e = state.employee_service.get(id).await?;
            let profile = employee_service::profile(&e, Local::now().date_naive());

            println!("{}", e.name);
            println!("  CPF:        {}", e.document_id);
            println!("  Sexo:       {}", e.sex.label());
            println!(
                "  Nascimento: {} ({} anos)",
                dates::format_date(e.birth_date),
                profile.age
            );
            println!(
                "  Admissão:   {} ({})",
                dates::format_date(e.admission_date),
                profile.tenure
            );
            println!("  Setor:      {}", e.sector);
            println!("  Cargo:      {}", e.role);
            if let Some(level) = &e.level {
                println!("  Nível:      {}", level);
            }
            if let Some(phone) = &e.phone {
                println!("  Telefone:   {}", phone);
            }
        }
        FuncionariosCommand::Criar(args) => {
            let payload = EmployeePayload {
                company_id: selection.current().company_or(args.empresa)?,
                name: args.nome,
                document_id: args.cpf,
                phone: args.telefone,
                sex: args.sexo,
                birth_date: args.nascimento,
                admission_date: args.admissao,
                sector: args.setor,
                role: args.cargo,
                level: args.nivel,
                salary: args.salario,
            };
            let employee = state.employee_service.create(&payload).await?;
            println!("Funcionário cadastrado com sucesso! (id {})", employee.id);
        }
        FuncionariosCommand::Selecionar { id } => {
            let employee = state.employee_service.get(id).await?;
            if selection.company_id() != Some(employee.company_id) {
                selection.select_company(employee.company_id)?;
            }
            selection.select_employee(employee.id)?;
            println!("Funcionário atual: {}", employee.name);
        }
        FuncionariosCommand::Foto { id, arquivo } => {
            let max = state.config.upload_limits.max_image_bytes;
            let (file_name, bytes) = upload::read_file(&arquivo, max).await?;
            let path = state
                .employee_service
                .upload_photo(id, &file_name, bytes)
                .await?;
            println!("Foto enviada: {}", path);
        }
        FuncionariosCommand::Remover { id } => {
            state.employee_service.delete(id).await?;
            if selection.employee_id() == Some(id) {
                selection.forget_employee()?;
            }
            println!("Funcionário removido.");
        }
    }
    Ok(())
}

async fn usuarios(state: &AppState, cmd: UsuariosCommand) -> Result<(), AppError> {
    match cmd {
        UsuariosCommand::Listar => {
            for u in state.user_service.list().await? {
                let status = if u.active { "ativo" } else { "inativo" };
                println!("[{}] {} ({}) - {} - {}", u.id, u.name, u.login, u.role, status);
            }
        }
        UsuariosCommand::Ativar { id } => {
            let user = state.user_service.set_active(id, true).await?;
            println!("Usuário {} ativado.", user.login);
        }
        UsuariosCommand::Desativar { id } => {
            let user = state.user_service.set_active(id, false).await?;
            println!("Usuário {} desativado.", user.login);
        }
        UsuariosCommand::Cargos => {
            for role in state.user_service.roles().await? {
                println!("[{}] {}: {}", role.id, role.name, role.permissions.join(", "));
            }
        }
        UsuariosCommand::Permissoes => {
            for p in state.user_service.permissions().await? {
                println!("{} - {}", p.slug, p.description.unwrap_or_default());
            }
        }
    }
    Ok(())
}

async fn notificacoes(
    state: &AppState,
    selection: &mut SelectionStore,
    cmd: NotificacoesCommand,
) -> Result<(), AppError> {
    match cmd {
        NotificacoesCommand::Listar {
            funcionario,
            tipo,
            de,
            ate,
        } => {
            let employee_id = selection.current().employee_or(funcionario)?;
            let notifications = state.notification_service.list(employee_id).await?;

            let filter = NotificationFilter {
                kind: tipo,
                from: de,
                until: ate,
            };
            for n in filter.apply(&notifications) {
                let period = match n.end_date {
                    Some(end) if end != n.start_date => format!(
                        "{} a {}",
                        dates::format_date(n.start_date),
                        dates::format_date(end)
                    ),
                    _ => dates::format_date(n.start_date),
                };
                println!("[{}] {} - {}", n.id, n.kind.label(), period);
                if let Some(description) = &n.description {
                    println!("    {}", description);
                }
            }
        }
        NotificacoesCommand::Criar {
            funcionario,
            tipo,
            inicio,
            fim,
            descricao,
            anexo,
        } => {
            let payload = NotificationPayload {
                employee_id: selection.current().employee_or(funcionario)?,
                kind: tipo,
                start_date: inicio,
                end_date: fim,
                description: descricao,
            };

            let limits = state.config.upload_limits;
            let notification = match &anexo {
                Some(path) => {
                    let (file_name, bytes) =
                        upload::read_file(path, limits.max_attachment_bytes).await?;
                    state
                        .notification_service
                        .create_with_attachment(&payload, &file_name, bytes)
                        .await?
                }
                None => state.notification_service.create(&payload).await?,
            };
            println!("{} registrada com sucesso!", notification.kind.label());
        }
        NotificacoesCommand::Resumo { funcionario } => {
            let employee_id = selection.current().employee_or(funcionario)?;
            let summary = state.notification_service.summary(employee_id).await?;

            for (kind, count) in &summary.counts {
                println!("{}: {}", kind.label(), count);
            }
            println!("Dias de falta: {}", summary.absence_days.normalize());
            println!("Dias de atestado: {}", summary.medical_leave_days);
            println!("Dias de suspensão: {}", summary.suspension_days);
        }
    }
    Ok(())
}
