//! # 문자열 유틸리티
//!
//! 폼 입력과 외부 API 응답의 문자열 정리를 담당하는 공통 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거한 문자열을 반환합니다.
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 공백뿐인 옵션 문자열을 None으로 정규화합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 역직렬화 시점에 옵션 문자열을 정규화하는 serde 헬퍼
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("  hello  "), "hello");
        assert_eq!(trim_string("hello"), "hello");
        assert_eq!(trim_string("\t\n"), "");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  value  ".to_string())),
            Some("value".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some(String::new())), None);
        assert_eq!(clean_optional_string(None), None);
    }
}
