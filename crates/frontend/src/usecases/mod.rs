pub mod u508_csv_chart_upload;
