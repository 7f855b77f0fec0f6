// src/services/upload.rs
//
// Conferência dos arquivos antes de qualquer envio: tamanho e tipo real
// (pelo conteúdo, não pela extensão).

use std::path::Path;

use image::ImageFormat;

use crate::{api::Upload, common::error::AppError};

pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_MAX_ATTACHMENT_BYTES: usize = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_image_bytes: usize,
    pub max_attachment_bytes: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
        }
    }
}

fn check_size(bytes: &[u8], max: usize) -> Result<(), AppError> {
    if bytes.is_empty() {
        return Err(AppError::EmptyFile);
    }
    if bytes.len() > max {
        return Err(AppError::FileTooLarge {
            size: bytes.len(),
            max,
        });
    }
    Ok(())
}

fn image_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Gif => Some("image/gif"),
        _ => None,
    }
}

impl UploadLimits {
    /// Foto de funcionário ou logo de empresa.
    pub fn image(
        &self,
        field: &'static str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Upload, AppError> {
        check_size(&bytes, self.max_image_bytes)?;
        let mime = image_mime(&bytes)
            .ok_or_else(|| AppError::UnsupportedFileType(file_name.to_string()))?;

        Ok(Upload {
            field,
            file_name: file_name.to_string(),
            mime,
            bytes,
        })
    }

    /// Anexo de notificação: imagem ou PDF.
    pub fn attachment(&self, file_name: &str, bytes: Vec<u8>) -> Result<Upload, AppError> {
        check_size(&bytes, self.max_attachment_bytes)?;
        let mime = if bytes.starts_with(PDF_MAGIC) {
            "application/pdf"
        } else {
            image_mime(&bytes)
                .ok_or_else(|| AppError::UnsupportedFileType(file_name.to_string()))?
        };

        Ok(Upload {
            field: "anexo",
            file_name: file_name.to_string(),
            mime,
            bytes,
        })
    }
}

/// Lê o arquivo do disco e devolve (nome, conteúdo).
///
/// O tamanho é conferido pelos metadados antes da leitura.
pub async fn read_file(path: &Path, max: usize) -> Result<(String, Vec<u8>), AppError> {
    let size = tokio::fs::metadata(path).await?.len();
    if size > max as u64 {
        return Err(AppError::FileTooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            max,
        });
    }

    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("arquivo")
        .to_string();
    Ok((name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn accepts_png_and_jpeg_by_content() {
        let limits = UploadLimits::default();
        let upload = limits.image("foto", "foto.bin", PNG_HEADER.to_vec()).unwrap();
        assert_eq!(upload.mime, "image/png");
        let upload = limits.image("foto", "foto.png", JPEG_HEADER.to_vec()).unwrap();
        assert_eq!(upload.mime, "image/jpeg");
    }

    #[test]
    fn rejects_non_images_even_with_image_extension() {
        let limits = UploadLimits::default();
        let err = limits
            .image("foto", "foto.png", b"isto nao e uma imagem".to_vec())
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFileType(_)));
    }

    #[test]
    fn rejects_oversized_before_sniffing() {
        let limits = UploadLimits {
            max_image_bytes: 16,
            max_attachment_bytes: 16,
        };
        let mut bytes = PNG_HEADER.to_vec();
        bytes.extend_from_slice(&[0u8; 32]);
        let err = limits.image("foto", "foto.png", bytes).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { max: 16, .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let limits = UploadLimits::default();
        assert!(matches!(
            limits.attachment("a.pdf", Vec::new()),
            Err(AppError::EmptyFile)
        ));
    }

    #[test]
    fn attachments_accept_pdf() {
        let limits = UploadLimits::default();
        let upload = limits
            .attachment("atestado.pdf", b"%PDF-1.7\n...".to_vec())
            .unwrap();
        assert_eq!(upload.mime, "application/pdf");
        assert_eq!(upload.field, "anexo");
        assert!(limits.attachment("planilha.xlsx", b"PK\x03\x04".to_vec()).is_err());
    }

    #[tokio::test]
    async fn read_file_rejects_large_files_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grande.png");
        std::fs::write(&path, vec![0u8; 64]).unwrap();

        let err = read_file(&path, 32).await.unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size: 64, max: 32 }));

        let (name, bytes) = read_file(&path, 64).await.unwrap();
        assert_eq!(name, "grande.png");
        assert_eq!(bytes.len(), 64);
    }
}
