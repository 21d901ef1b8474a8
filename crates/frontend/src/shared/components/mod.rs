pub mod bar_chart;
pub mod date_input;
pub mod stat_card;
pub mod vendas_table;
pub mod select_field;
