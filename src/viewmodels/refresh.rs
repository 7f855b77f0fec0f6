// src/viewmodels/refresh.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sinal de "dados atualizados" compartilhado entre um formulário e a tabela da tela.
///
/// O formulário chama `bump` depois de salvar; a tabela compara a geração que
/// viu por último com `generation` para saber se precisa buscar de novo.
#[derive(Debug, Clone, Default)]
pub struct RefreshFlag {
    generation: Arc<AtomicU64>,
}

impl RefreshFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
