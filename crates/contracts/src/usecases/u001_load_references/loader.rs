use super::response::parse_list;
use super::{LoadError, ReferenceBundle, ReferenceEndpoint};
use crate::domain::a002_organization::Organization;
use crate::domain::a003_counterparty::Counterparty;
use crate::domain::a004_nomenclature::Product;
use crate::domain::a025_warehouse::Warehouse;
use crate::domain::a026_paybox::Paybox;
use crate::domain::a027_price_type::PriceType;
use futures::future::{self, Either};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::pin;

/// Источник сырых ответов API справочников
///
/// Реализация отвечает только за транспорт: вернуть тело ответа или
/// текст ошибки. Разбор и правило "всё или ничего" остаются здесь.
#[allow(async_fn_in_trait)]
pub trait ReferenceSource {
    async fn fetch(&self, endpoint: ReferenceEndpoint, token: &str) -> Result<String, String>;
}

/// Проверить токен перед запросами. Токен передаётся дальше как есть.
pub fn validate_token(token: &str) -> Result<&str, LoadError> {
    if token.trim().is_empty() {
        return Err(LoadError::EmptyToken);
    }
    Ok(token)
}

async fn fetch_list<S, T>(
    source: &S,
    endpoint: ReferenceEndpoint,
    token: &str,
) -> Result<Vec<T>, LoadError>
where
    S: ReferenceSource,
    T: DeserializeOwned,
{
    let body = source
        .fetch(endpoint, token)
        .await
        .map_err(|message| LoadError::Request { endpoint, message })?;
    let items = parse_list::<T>(endpoint, &body)?;
    log::debug!("{}: {} items", endpoint, items.len());
    Ok(items)
}

/// Загрузить все шесть справочников параллельно.
///
/// Возвращает набор целиком только если успешны все запросы; первая же
/// ошибка прерывает загрузку.
pub async fn load_references<S: ReferenceSource>(
    source: &S,
    token: &str,
) -> Result<ReferenceBundle, LoadError> {
    let token = validate_token(token)?;

    let (counterparties, warehouses, payboxes, organizations, price_types, products) = futures::try_join!(
        fetch_list::<S, Counterparty>(source, ReferenceEndpoint::Counterparties, token),
        fetch_list::<S, Warehouse>(source, ReferenceEndpoint::Warehouses, token),
        fetch_list::<S, Paybox>(source, ReferenceEndpoint::Payboxes, token),
        fetch_list::<S, Organization>(source, ReferenceEndpoint::Organizations, token),
        fetch_list::<S, PriceType>(source, ReferenceEndpoint::PriceTypes, token),
        fetch_list::<S, Product>(source, ReferenceEndpoint::Nomenclature, token),
    )?;

    Ok(ReferenceBundle {
        counterparties,
        warehouses,
        payboxes,
        organizations,
        price_types,
        products,
    })
}

/// То же, что [`load_references`], но с ограничением по времени.
///
/// `deadline` завершается, когда время вышло (в браузере это таймер
/// `gloo-timers`); `after_ms` попадает в текст ошибки.
pub async fn load_references_with_deadline<S, D>(
    source: &S,
    token: &str,
    deadline: D,
    after_ms: u32,
) -> Result<ReferenceBundle, LoadError>
where
    S: ReferenceSource,
    D: Future<Output = ()>,
{
    // Пустой токен отклоняем до запуска таймера
    validate_token(token)?;

    let load = pin!(load_references(source, token));
    let deadline = pin!(deadline);
    match future::select(load, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(LoadError::Timeout { after_ms }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockSource {
        overrides: HashMap<ReferenceEndpoint, Result<String, String>>,
        hang_on: Option<ReferenceEndpoint>,
        calls: RefCell<Vec<(ReferenceEndpoint, String)>>,
    }

    impl MockSource {
        fn with(mut self, endpoint: ReferenceEndpoint, response: Result<&str, &str>) -> Self {
            self.overrides.insert(
                endpoint,
                response.map(str::to_string).map_err(str::to_string),
            );
            self
        }

        fn default_body(endpoint: ReferenceEndpoint) -> String {
            match endpoint {
                ReferenceEndpoint::Counterparties => {
                    r#"{"result": [{"id": 1, "name": "Иван", "phone": "+79991234567"}]}"#.into()
                }
                ReferenceEndpoint::Nomenclature => {
                    r#"{"result": [{"id": 10, "name": "Milk 1L", "price": 80}]}"#.into()
                }
                _ => r#"{"result": [{"id": 1, "name": "Основной"}]}"#.into(),
            }
        }
    }

    impl ReferenceSource for MockSource {
        async fn fetch(&self, endpoint: ReferenceEndpoint, token: &str) -> Result<String, String> {
            self.calls.borrow_mut().push((endpoint, token.to_string()));
            if self.hang_on == Some(endpoint) {
                future::pending::<()>().await;
            }
            self.overrides
                .get(&endpoint)
                .cloned()
                .unwrap_or_else(|| Ok(Self::default_body(endpoint)))
        }
    }

    #[test]
    fn test_empty_token_issues_no_requests() {
        let source = MockSource::default();
        let err = block_on(load_references(&source, "")).unwrap_err();
        assert!(matches!(err, LoadError::EmptyToken));
        let err = block_on(load_references(&source, "   ")).unwrap_err();
        assert!(matches!(err, LoadError::EmptyToken));
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_all_six_endpoints_requested_with_token() {
        let source = MockSource::default();
        let bundle = block_on(load_references(&source, "secret")).unwrap();

        let calls = source.calls.borrow();
        assert_eq!(calls.len(), 6);
        for endpoint in ReferenceEndpoint::ALL {
            assert!(calls.contains(&(endpoint, "secret".to_string())));
        }
        assert_eq!(bundle.counterparties.len(), 1);
        assert_eq!(bundle.products[0].name, "Milk 1L");
        assert_eq!(bundle.warehouses.len(), 1);
    }

    #[test]
    fn test_missing_result_field_is_empty_list() {
        let source = MockSource::default().with(ReferenceEndpoint::PriceTypes, Ok("{}"));
        let bundle = block_on(load_references(&source, "t")).unwrap();
        assert!(bundle.price_types.is_empty());
        assert_eq!(bundle.payboxes.len(), 1);
    }

    #[test]
    fn test_any_failed_request_fails_whole_load() {
        let source =
            MockSource::default().with(ReferenceEndpoint::Organizations, Err("HTTP 401"));
        let err = block_on(load_references(&source, "bad")).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Request {
                endpoint: ReferenceEndpoint::Organizations,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_response_fails_whole_load() {
        let source = MockSource::default().with(ReferenceEndpoint::Nomenclature, Ok("oops"));
        let err = block_on(load_references(&source, "t")).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_deadline_expires_on_hung_request() {
        let source = MockSource {
            hang_on: Some(ReferenceEndpoint::Payboxes),
            ..MockSource::default()
        };
        let err = block_on(load_references_with_deadline(
            &source,
            "t",
            future::ready(()),
            250,
        ))
        .unwrap_err();
        assert!(matches!(err, LoadError::Timeout { after_ms: 250 }));
    }

    #[test]
    fn test_completed_load_wins_over_deadline() {
        let source = MockSource::default();
        let bundle =
            block_on(load_references_with_deadline(&source, "t", future::ready(()), 250)).unwrap();
        assert_eq!(bundle.products.len(), 1);
    }

    #[test]
    fn test_deadline_variant_still_rejects_empty_token() {
        let source = MockSource::default();
        let err = block_on(load_references_with_deadline(
            &source,
            "",
            future::pending(),
            250,
        ))
        .unwrap_err();
        assert!(matches!(err, LoadError::EmptyToken));
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_empty_token_reported_even_if_deadline_already_passed() {
        let source = MockSource::default();
        let err = block_on(load_references_with_deadline(
            &source,
            "  ",
            future::ready(()),
            250,
        ))
        .unwrap_err();
        assert!(matches!(err, LoadError::EmptyToken));
    }
}
