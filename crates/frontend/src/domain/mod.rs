pub mod a025_scrap;
pub mod a026_sales_dispatch;
