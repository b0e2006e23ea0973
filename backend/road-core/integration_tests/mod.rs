mod support;

mod logging;
mod road_client;
