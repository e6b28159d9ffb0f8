use crate::normalize_cpf;

#[test]
fn test_normalize_cpf_strips_formatting() {
    assert_eq!(normalize_cpf("123.456.789-09").unwrap(), "12345678909");
    assert_eq!(normalize_cpf("123 456 789 09").unwrap(), "12345678909");
    assert_eq!(normalize_cpf("12345678909").unwrap(), "12345678909");
}

#[test]
fn test_normalize_cpf_rejects_wrong_length() {
    assert!(normalize_cpf("").is_err());
    assert!(normalize_cpf("1234567890").is_err());
    assert!(normalize_cpf("123456789012").is_err());
    assert!(normalize_cpf("abc.def.ghi-jk").is_err());
}
