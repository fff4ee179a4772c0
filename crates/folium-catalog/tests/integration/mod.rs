mod http_api;
mod static_files;
