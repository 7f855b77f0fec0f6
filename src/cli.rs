// src/cli.rs

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use gestao_rh::{
    common::dates,
    models::{employee::Sex, notification::NotificationKind},
};

#[derive(Debug, Parser)]
#[command(name = "gestao-rh", version, about = "Cliente do sistema de gestão de RH")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Autentica e guarda a sessão
    Login {
        #[arg(long)]
        login: String,
        #[arg(long, env = "RH_SENHA", hide_env_values = true)]
        senha: String,
    },
    /// Encerra a sessão
    Logout,
    #[command(subcommand)]
    Empresas(EmpresasCommand),
    #[command(subcommand)]
    Funcionarios(FuncionariosCommand),
    /// Aniversariantes do mês
    Aniversariantes {
        #[arg(long)]
        empresa: Option<i64>,
        /// Mês (1-12); padrão é o mês atual
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        mes: Option<u32>,
    },
    #[command(subcommand)]
    Descricoes(DescricoesCommand),
    #[command(subcommand)]
    Usuarios(UsuariosCommand),
    #[command(subcommand)]
    Notificacoes(NotificacoesCommand),
}

#[derive(Debug, Subcommand)]
pub enum EmpresasCommand {
    Listar,
    Criar {
        #[arg(long)]
        nome: String,
        #[arg(long)]
        cnpj: String,
        #[arg(long)]
        cor: Option<String>,
    },
    /// Define a empresa atual
    Selecionar { id: i64 },
    /// Envia o logo da empresa
    Logo { id: i64, arquivo: PathBuf },
}

#[derive(Debug, Args)]
pub struct EmployeeFilterArgs {
    #[arg(long)]
    pub empresa: Option<i64>,
    #[arg(long)]
    pub nome: Option<String>,
    #[arg(long, value_parser = parse_sex)]
    pub sexo: Option<Sex>,
    #[arg(long)]
    pub setor: Option<String>,
    #[arg(long)]
    pub cargo: Option<String>,
    #[arg(long)]
    pub nivel: Option<String>,
    /// Mês de aniversário (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub mes: Option<u32>,
}

#[derive(Debug, Args)]
pub struct NewEmployeeArgs {
    #[arg(long)]
    pub empresa: Option<i64>,
    #[arg(long)]
    pub nome: String,
    #[arg(long)]
    pub cpf: String,
    #[arg(long)]
    pub telefone: Option<String>,
    #[arg(long, value_parser = parse_sex)]
    pub sexo: Sex,
    #[arg(long, value_parser = parse_date)]
    pub nascimento: NaiveDate,
    #[arg(long, value_parser = parse_date)]
    pub admissao: NaiveDate,
    #[arg(long)]
    pub setor: String,
    #[arg(long)]
    pub cargo: String,
    #[arg(long)]
    pub nivel: Option<String>,
    #[arg(long)]
    pub salario: Option<Decimal>,
}

#[derive(Debug, Subcommand)]
pub enum FuncionariosCommand {
    Listar(EmployeeFilterArgs),
    /// Ficha com idade e tempo de casa
    Ver { id: i64 },
    Criar(NewEmployeeArgs),
    /// Define o funcionário atual
    Selecionar { id: i64 },
    /// Envia a foto do funcionário
    Foto { id: i64, arquivo: PathBuf },
    Remover { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum DescricoesCommand {
    Listar {
        #[arg(long)]
        empresa: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum UsuariosCommand {
    Listar,
    Ativar { id: i64 },
    Desativar { id: i64 },
    /// Cargos de acesso
    Cargos,
    Permissoes,
}

#[derive(Debug, Subcommand)]
pub enum NotificacoesCommand {
    Listar {
        #[arg(long)]
        funcionario: Option<i64>,
        #[arg(long, value_parser = parse_kind)]
        tipo: Option<NotificationKind>,
        #[arg(long, value_parser = parse_date)]
        de: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        ate: Option<NaiveDate>,
    },
    Criar {
        #[arg(long)]
        funcionario: Option<i64>,
        #[arg(long, value_parser = parse_kind)]
        tipo: NotificationKind,
        #[arg(long, value_parser = parse_date)]
        inicio: NaiveDate,
        #[arg(long, value_parser = parse_date)]
        fim: Option<NaiveDate>,
        #[arg(long)]
        descricao: Option<String>,
        /// Atestado ou documento anexo (imagem ou PDF)
        #[arg(long)]
        anexo: Option<PathBuf>,
    },
    /// Totais de faltas, atestados e suspensões
    Resumo {
        #[arg(long)]
        funcionario: Option<i64>,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    dates::parse_date(value).map_err(|e| e.to_string())
}

fn parse_sex(value: &str) -> Result<Sex, String> {
    Sex::parse(value).ok_or_else(|| format!("sexo inválido: '{}' (use M ou F)", value))
}

fn parse_kind(value: &str) -> Result<NotificationKind, String> {
    NotificationKind::parse(value).ok_or_else(|| {
        format!(
            "tipo inválido: '{}' (falta, meia_falta, atestado, advertencia, suspensao)",
            value
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_employee_filters() {
        let cli = Cli::try_parse_from([
            "gestao-rh", "funcionarios", "listar", "--sexo", "f", "--mes", "3", "--setor", "RH",
        ])
        .unwrap();
        match cli.command {
            Command::Funcionarios(FuncionariosCommand::Listar(args)) => {
                assert_eq!(args.sexo, Some(Sex::Female));
                assert_eq!(args.mes, Some(3));
                assert_eq!(args.setor.as_deref(), Some("RH"));
            }
            other => panic!("comando inesperado: {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(Cli::try_parse_from(["gestao-rh", "aniversariantes", "--mes", "13"]).is_err());
    }
}
