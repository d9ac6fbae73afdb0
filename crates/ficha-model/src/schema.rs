//! Declared column groups of the registry export.
//!
//! Column types are fixed here rather than inferred from the data. The
//! cleaning pipeline refuses to run when any of these columns is absent.

/// Binary flags stored as `0`/`1` or `true`/`false`.
pub const BOOLEAN_COLUMNS: [&str; 8] = [
    "obito",
    "luz_eletrica",
    "em_situacao_de_rua",
    "frequenta_escola",
    "possui_plano_saude",
    "vulnerabilidade_social",
    "familia_beneficiaria_auxilio_brasil",
    "crianca_matriculada_creche_pre_escola",
];

/// Free categorical fields normalized to trimmed lowercase text.
pub const CATEGORICAL_COLUMNS: [&str; 6] = [
    "identidade_genero",
    "orientacao_sexual",
    "bairro",
    "raca_cor",
    "ocupacao",
    "religiao",
];

pub const DATE_COLUMNS: [&str; 4] = [
    "data_cadastro",
    "data_nascimento",
    "data_atualizacao_cadastro",
    "updated_at",
];

pub const NUMERIC_COLUMNS: [&str; 6] = [
    "altura",
    "peso",
    "pressao_sistolica",
    "pressao_diastolica",
    "n_atendimentos_atencao_primaria",
    "n_atendimentos_hospital",
];

/// Text columns with a dedicated rule outside the typed groups.
pub const FREE_TEXT_COLUMNS: [&str; 4] = [
    "renda_familiar",
    "meios_comunicacao",
    "em_caso_doenca_procura",
    "meios_transporte",
];

pub const RACE_COLUMN: &str = "raca_cor";
pub const RELIGION_COLUMN: &str = "religiao";
pub const INCOME_COLUMN: &str = "renda_familiar";
pub const GENDER_IDENTITY_COLUMN: &str = "identidade_genero";
pub const COMMUNICATION_COLUMN: &str = "meios_comunicacao";
pub const CARE_SEEKING_COLUMN: &str = "em_caso_doenca_procura";
pub const TRANSPORT_COLUMN: &str = "meios_transporte";
pub const HEIGHT_COLUMN: &str = "altura";
pub const WEIGHT_COLUMN: &str = "peso";
pub const SYSTOLIC_COLUMN: &str = "pressao_sistolica";
pub const DIASTOLIC_COLUMN: &str = "pressao_diastolica";
pub const PRESSURE_COLUMNS: [&str; 2] = [SYSTOLIC_COLUMN, DIASTOLIC_COLUMN];
pub const VISIT_COUNT_COLUMNS: [&str; 2] =
    ["n_atendimentos_atencao_primaria", "n_atendimentos_hospital"];

/// A named group of declared columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnGroup {
    Boolean,
    Categorical,
    Date,
    Numeric,
    FreeText,
}

impl ColumnGroup {
    pub const ALL: [ColumnGroup; 5] = [
        ColumnGroup::Boolean,
        ColumnGroup::Categorical,
        ColumnGroup::Date,
        ColumnGroup::Numeric,
        ColumnGroup::FreeText,
    ];

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ColumnGroup::Boolean => &BOOLEAN_COLUMNS,
            ColumnGroup::Categorical => &CATEGORICAL_COLUMNS,
            ColumnGroup::Date => &DATE_COLUMNS,
            ColumnGroup::Numeric => &NUMERIC_COLUMNS,
            ColumnGroup::FreeText => &FREE_TEXT_COLUMNS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ColumnGroup::Boolean => "Boolean",
            ColumnGroup::Categorical => "Categorical",
            ColumnGroup::Date => "Date",
            ColumnGroup::Numeric => "Numeric",
            ColumnGroup::FreeText => "Free text",
        }
    }
}

/// Every column the cleaning pipeline needs, in declaration order.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    ColumnGroup::ALL
        .into_iter()
        .flat_map(|group| group.columns().iter().copied())
}
