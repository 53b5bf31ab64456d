pub mod geoip_repository;
