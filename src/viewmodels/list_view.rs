// src/viewmodels/list_view.rs

use std::future::Future;

use crate::{
    common::error::{AppError, UserFeedback},
    viewmodels::refresh::RefreshFlag,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(UserFeedback),
}

/// Tabela que busca a coleção ao montar e de novo sempre que o `RefreshFlag` muda.
#[derive(Debug)]
pub struct ListView<T> {
    state: ListState<T>,
    refresh: RefreshFlag,
    // Geração do flag na última busca; `None` = ainda não montou
    seen_generation: Option<u64>,
}

impl<T> ListView<T> {
    pub fn new(refresh: RefreshFlag) -> Self {
        Self {
            state: ListState::Idle,
            refresh,
            seen_generation: None,
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        match &self.state {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn needs_fetch(&self) -> bool {
        !self.is_loading() && self.seen_generation != Some(self.refresh.generation())
    }

    /// Executa a busca se for necessária. Devolve `true` quando buscou.
    pub async fn sync<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, AppError>>,
    {
        if !self.needs_fetch() {
            return false;
        }
        self.load(fetch).await;
        true
    }

    /// Busca incondicional (botão "recarregar").
    pub async fn load<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, AppError>>,
    {
        let generation = self.refresh.generation();
        self.state = ListState::Loading;

        self.state = match fetch().await {
            Ok(items) => ListState::Loaded(items),
            Err(e) => {
                tracing::warn!("Falha ao carregar lista: {}", e);
                ListState::Failed(e.to_feedback())
            }
        };
        self.seen_generation = Some(generation);
    }
}
