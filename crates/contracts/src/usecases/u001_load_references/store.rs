use super::loader::validate_token;
use super::LoadError;
use crate::domain::a002_organization::Organization;
use crate::domain::a003_counterparty::Counterparty;
use crate::domain::a004_nomenclature::Product;
use crate::domain::a025_warehouse::Warehouse;
use crate::domain::a026_paybox::Paybox;
use crate::domain::a027_price_type::PriceType;

/// Все шесть справочников, загруженные одним запросом формы.
///
/// Заменяется только целиком: частично обновлённого набора не бывает.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceBundle {
    pub counterparties: Vec<Counterparty>,
    pub warehouses: Vec<Warehouse>,
    pub payboxes: Vec<Paybox>,
    pub organizations: Vec<Organization>,
    pub price_types: Vec<PriceType>,
    pub products: Vec<Product>,
}

impl ReferenceBundle {
    pub fn is_empty(&self) -> bool {
        self.counterparties.is_empty()
            && self.warehouses.is_empty()
            && self.payboxes.is_empty()
            && self.organizations.is_empty()
            && self.price_types.is_empty()
            && self.products.is_empty()
    }

    /// Краткая сводка для лога
    pub fn summary(&self) -> String {
        format!(
            "contragents={} warehouses={} payboxes={} organizations={} price_types={} nomenclature={}",
            self.counterparties.len(),
            self.warehouses.len(),
            self.payboxes.len(),
            self.organizations.len(),
            self.price_types.len(),
            self.products.len()
        )
    }
}

/// Квитанция на запущенную загрузку
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    token: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Чем закончилось применение результата загрузки
#[derive(Debug)]
pub enum LoadOutcome {
    /// Набор справочников заменён
    Applied,
    /// Загрузка не удалась, прежние данные сохранены
    Failed(LoadError),
    /// Пока шла загрузка, была запущена более новая; результат отброшен
    Stale,
}

/// Хранилище справочников на время сессии
///
/// Каждая загрузка получает номер поколения. Применяется только результат
/// последней запущенной загрузки: повторная отправка токена вытесняет
/// предыдущую, а её поздний ответ игнорируется.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceStore {
    token: Option<String>,
    bundle: ReferenceBundle,
    generation: u64,
    in_flight: Option<u64>,
    loaded: bool,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bundle(&self) -> &ReferenceBundle {
        &self.bundle
    }

    /// Токен, с которым были загружены текущие данные
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Была ли хотя бы одна успешная загрузка
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Начать загрузку. Пустой токен отклоняется без запросов.
    pub fn begin_load(&mut self, token: &str) -> Result<LoadTicket, LoadError> {
        let token = validate_token(token)?;

        if let Some(previous) = self.in_flight {
            log::info!("Reference load #{} superseded by a new submission", previous);
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        log::info!("Reference load #{} started", self.generation);

        Ok(LoadTicket {
            generation: self.generation,
            token: token.to_string(),
        })
    }

    /// Применить результат загрузки
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ReferenceBundle, LoadError>,
    ) -> LoadOutcome {
        if self.in_flight != Some(ticket.generation) {
            log::warn!(
                "Discarding result of reference load #{} (current: {:?})",
                ticket.generation,
                self.in_flight
            );
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(bundle) => {
                log::info!(
                    "Reference load #{} applied: {}",
                    ticket.generation,
                    bundle.summary()
                );
                self.bundle = bundle;
                self.token = Some(ticket.token);
                self.loaded = true;
                LoadOutcome::Applied
            }
            Err(e) => {
                log::error!("Reference load #{} failed: {}", ticket.generation, e);
                LoadOutcome::Failed(e)
            }
        }
    }
}
