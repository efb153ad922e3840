use thiserror::Error;

/// Rejections produced while validating submitted wish content.
///
/// The `Display` text is what the caller sees in the `error` field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("잘못된 요청입니다")]
    MalformedBody,

    #[error("요청이 너무 큽니다")]
    BodyTooLarge,

    #[error("소원을 입력해주세요")]
    Missing,

    #[error("소원을 입력해주세요")]
    Empty,

    #[error("소원은 {max}자 이내로 작성해주세요")]
    TooLong { max: usize, len: usize },
}
