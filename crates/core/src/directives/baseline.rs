//! Stock nginx directives, mirroring the server's own module metadata
//! (`ngx_command_t` context and argument flags).
//!
//! Regenerate from the nginx sources rather than editing by hand; third-party
//! directives belong in `extensions.rs`.

use super::{Arity, Contexts, Descriptor};

const MAIN: Contexts = Contexts::MAIN;
const EVENT: Contexts = Contexts::EVENT;
const ANY: Contexts = Contexts::ANY;

const H_MAIN: Contexts = Contexts::HTTP_MAIN;
const H_SRV: Contexts = Contexts::HTTP_SRV;
const H_LOC: Contexts = Contexts::HTTP_LOC;
const H_UPS: Contexts = Contexts::HTTP_UPS;
const H_MS: Contexts = H_MAIN.union(H_SRV);
const H_SL: Contexts = H_SRV.union(H_LOC);
const H_MSL: Contexts = H_MS.union(H_LOC);
const H_MSLI: Contexts = H_MSL.union(Contexts::HTTP_LIF);
const H_MSLIM: Contexts = H_MSLI.union(Contexts::HTTP_LMT);
const H_MSLM: Contexts = H_MSL.union(Contexts::HTTP_LMT);
const H_LI: Contexts = H_LOC.union(Contexts::HTTP_LIF);
const H_LIM: Contexts = H_LI.union(Contexts::HTTP_LMT);
/// Where the rewrite module's directives run.
const H_RW: Contexts = H_SRV
    .union(Contexts::HTTP_SIF)
    .union(H_LOC)
    .union(Contexts::HTTP_LIF);
const H_MRW: Contexts = H_RW.union(H_MAIN);

const S_MAIN: Contexts = Contexts::STREAM_MAIN;
const S_SRV: Contexts = Contexts::STREAM_SRV;
const S_UPS: Contexts = Contexts::STREAM_UPS;
const S_MS: Contexts = S_MAIN.union(S_SRV);

const M_MAIN: Contexts = Contexts::MAIL_MAIN;
const M_SRV: Contexts = Contexts::MAIL_SRV;
const M_MS: Contexts = M_MAIN.union(M_SRV);

const NOARGS: Arity = Arity::NoArgs;
const FLAG: Arity = Arity::Flag;
const TAKE1: Arity = Arity::Take(1);
const TAKE2: Arity = Arity::Take(2);
const TAKE12: Arity = Arity::Range(1, 2);
const TAKE123: Arity = Arity::Range(1, 3);
const TAKE1234: Arity = Arity::Range(1, 4);
const TAKE23: Arity = Arity::Range(2, 3);
const TAKE34: Arity = Arity::Range(3, 4);
const MORE1: Arity = Arity::AtLeast(1);
const MORE2: Arity = Arity::AtLeast(2);

const fn d(contexts: Contexts, arity: Arity) -> Descriptor {
    Descriptor::new(contexts, arity)
}

const fn b(contexts: Contexts, arity: Arity) -> Descriptor {
    Descriptor::block(contexts, arity)
}

pub(super) static BASELINE: &[(&str, &[Descriptor])] = &[
    // core
    ("daemon", &[d(MAIN, FLAG)]),
    ("master_process", &[d(MAIN, FLAG)]),
    ("timer_resolution", &[d(MAIN, TAKE1)]),
    ("pid", &[d(MAIN, TAKE1)]),
    ("lock_file", &[d(MAIN, TAKE1)]),
    ("worker_processes", &[d(MAIN, TAKE1)]),
    ("debug_points", &[d(MAIN, TAKE1)]),
    ("user", &[d(MAIN, TAKE12)]),
    ("worker_priority", &[d(MAIN, TAKE1)]),
    ("worker_cpu_affinity", &[d(MAIN, MORE1)]),
    ("worker_rlimit_nofile", &[d(MAIN, TAKE1)]),
    ("worker_rlimit_core", &[d(MAIN, TAKE1)]),
    ("worker_shutdown_timeout", &[d(MAIN, TAKE1)]),
    ("working_directory", &[d(MAIN, TAKE1)]),
    ("env", &[d(MAIN, TAKE1)]),
    ("load_module", &[d(MAIN, TAKE1)]),
    ("pcre_jit", &[d(MAIN, FLAG)]),
    ("thread_pool", &[d(MAIN, TAKE23)]),
    ("ssl_engine", &[d(MAIN, TAKE1)]),
    ("google_perftools_profiles", &[d(MAIN, TAKE1)]),
    ("include", &[d(ANY, TAKE1)]),
    (
        "error_log",
        &[
            d(MAIN, MORE1),
            d(H_MSL, MORE1),
            d(M_MS, MORE1),
            d(S_MS, MORE1),
        ],
    ),
    ("events", &[b(MAIN, NOARGS)]),
    ("http", &[b(MAIN, NOARGS)]),
    ("stream", &[b(MAIN, NOARGS)]),
    ("mail", &[b(MAIN, NOARGS)]),
    // events
    ("worker_connections", &[d(EVENT, TAKE1)]),
    ("use", &[d(EVENT, TAKE1)]),
    ("multi_accept", &[d(EVENT, FLAG)]),
    ("accept_mutex", &[d(EVENT, FLAG)]),
    ("accept_mutex_delay", &[d(EVENT, TAKE1)]),
    ("debug_connection", &[d(EVENT, TAKE1)]),
    ("worker_aio_requests", &[d(EVENT, TAKE1)]),
    // http core
    (
        "server",
        &[
            b(H_MAIN, NOARGS),
            d(H_UPS, MORE1),
            b(M_MAIN, NOARGS),
            b(S_MAIN, NOARGS),
            d(S_UPS, MORE1),
        ],
    ),
    ("location", &[b(H_SL, TAKE12)]),
    ("listen", &[d(H_SRV, MORE1), d(M_SRV, MORE1), d(S_SRV, MORE1)]),
    ("server_name", &[d(H_SRV, MORE1), d(M_MS, TAKE1)]),
    ("upstream", &[b(H_MAIN, TAKE1), b(S_MAIN, TAKE1)]),
    ("if", &[b(H_SL, MORE1)]),
    ("limit_except", &[b(H_LOC, MORE1)]),
    ("types", &[b(H_MSL, NOARGS)]),
    ("root", &[d(H_MSLI, TAKE1)]),
    ("alias", &[d(H_LOC, TAKE1)]),
    ("index", &[d(H_MSL, MORE1)]),
    ("try_files", &[d(H_SL, MORE2)]),
    ("default_type", &[d(H_MSL, TAKE1)]),
    ("sendfile", &[d(H_MSLI, FLAG)]),
    ("sendfile_max_chunk", &[d(H_MSL, TAKE1)]),
    ("tcp_nopush", &[d(H_MSL, FLAG)]),
    ("tcp_nodelay", &[d(H_MSL, FLAG), d(S_MS, FLAG)]),
    ("keepalive_timeout", &[d(H_MSL, TAKE12), d(H_UPS, TAKE1)]),
    ("keepalive_requests", &[d(H_MSL, TAKE1), d(H_UPS, TAKE1)]),
    ("keepalive_time", &[d(H_MSL, TAKE1), d(H_UPS, TAKE1)]),
    ("keepalive_disable", &[d(H_MSL, TAKE12)]),
    ("client_max_body_size", &[d(H_MSL, TAKE1)]),
    ("client_body_buffer_size", &[d(H_MSL, TAKE1)]),
    ("client_body_timeout", &[d(H_MSL, TAKE1)]),
    ("client_body_temp_path", &[d(H_MSL, TAKE1234)]),
    ("client_body_in_file_only", &[d(H_MSL, TAKE1)]),
    ("client_body_in_single_buffer", &[d(H_MSL, FLAG)]),
    ("client_header_timeout", &[d(H_MS, TAKE1)]),
    ("client_header_buffer_size", &[d(H_MS, TAKE1)]),
    ("large_client_header_buffers", &[d(H_MS, TAKE2)]),
    ("connection_pool_size", &[d(H_MS, TAKE1)]),
    ("request_pool_size", &[d(H_MS, TAKE1)]),
    ("send_timeout", &[d(H_MSL, TAKE1)]),
    ("server_tokens", &[d(H_MSL, TAKE1)]),
    ("server_names_hash_max_size", &[d(H_MAIN, TAKE1)]),
    ("server_names_hash_bucket_size", &[d(H_MAIN, TAKE1)]),
    ("variables_hash_max_size", &[d(H_MAIN, TAKE1), d(S_MAIN, TAKE1)]),
    ("variables_hash_bucket_size", &[d(H_MAIN, TAKE1), d(S_MAIN, TAKE1)]),
    ("types_hash_max_size", &[d(H_MSL, TAKE1)]),
    ("types_hash_bucket_size", &[d(H_MSL, TAKE1)]),
    ("underscores_in_headers", &[d(H_MS, FLAG)]),
    ("ignore_invalid_headers", &[d(H_MS, FLAG)]),
    ("merge_slashes", &[d(H_MS, FLAG)]),
    ("resolver", &[d(H_MSL, MORE1), d(S_MS, MORE1), d(M_MS, MORE1)]),
    ("resolver_timeout", &[d(H_MSL, TAKE1), d(S_MS, TAKE1), d(M_MS, TAKE1)]),
    ("error_page", &[d(H_MSLI, MORE2)]),
    ("recursive_error_pages", &[d(H_MSL, FLAG)]),
    ("internal", &[d(H_LOC, NOARGS)]),
    ("log_not_found", &[d(H_MSL, FLAG)]),
    ("log_subrequest", &[d(H_MSL, FLAG)]),
    ("open_file_cache", &[d(H_MSL, TAKE12)]),
    ("open_file_cache_valid", &[d(H_MSL, TAKE1)]),
    ("open_file_cache_min_uses", &[d(H_MSL, TAKE1)]),
    ("open_file_cache_errors", &[d(H_MSL, FLAG)]),
    ("output_buffers", &[d(H_MSL, TAKE2)]),
    ("postpone_output", &[d(H_MSL, TAKE1)]),
    ("reset_timedout_connection", &[d(H_MSL, FLAG)]),
    ("satisfy", &[d(H_MSL, TAKE1)]),
    ("aio", &[d(H_MSL, TAKE1)]),
    ("aio_write", &[d(H_MSL, FLAG)]),
    ("directio", &[d(H_MSL, TAKE1)]),
    ("directio_alignment", &[d(H_MSL, TAKE1)]),
    ("absolute_redirect", &[d(H_MSL, FLAG)]),
    ("port_in_redirect", &[d(H_MSL, FLAG)]),
    ("server_name_in_redirect", &[d(H_MSL, FLAG)]),
    ("chunked_transfer_encoding", &[d(H_MSL, FLAG)]),
    ("etag", &[d(H_MSL, FLAG)]),
    ("if_modified_since", &[d(H_MSL, TAKE1)]),
    ("limit_rate", &[d(H_MSLI, TAKE1)]),
    ("limit_rate_after", &[d(H_MSLI, TAKE1)]),
    ("lingering_close", &[d(H_MSL, TAKE1)]),
    ("lingering_time", &[d(H_MSL, TAKE1)]),
    ("lingering_timeout", &[d(H_MSL, TAKE1)]),
    ("msie_padding", &[d(H_MSL, FLAG)]),
    ("msie_refresh", &[d(H_MSL, FLAG)]),
    ("max_ranges", &[d(H_MSL, TAKE1)]),
    ("subrequest_output_buffer_size", &[d(H_MSL, TAKE1)]),
    ("disable_symlinks", &[d(H_MSL, TAKE12)]),
    ("http2", &[d(H_MS, FLAG)]),
    ("http2_max_concurrent_streams", &[d(H_MS, TAKE1)]),
    ("http2_recv_buffer_size", &[d(H_MAIN, TAKE1)]),
    ("http2_chunk_size", &[d(H_MSL, TAKE1)]),
    ("http3", &[d(H_MS, FLAG)]),
    // rewrite
    ("return", &[d(H_RW, TAKE12), d(S_SRV, TAKE1)]),
    ("rewrite", &[d(H_RW, TAKE23)]),
    ("set", &[d(H_RW, TAKE2), d(S_SRV, TAKE2)]),
    ("break", &[d(H_RW, NOARGS)]),
    ("rewrite_log", &[d(H_MRW, FLAG)]),
    ("uninitialized_variable_warn", &[d(H_MRW, FLAG)]),
    // logging
    ("access_log", &[d(H_MSLIM, MORE1), d(S_MS, MORE1)]),
    ("log_format", &[d(H_MAIN, MORE2), d(S_MAIN, MORE2)]),
    ("open_log_file_cache", &[d(H_MSL, TAKE1234), d(S_MS, TAKE1234)]),
    // access and auth
    ("allow", &[d(H_MSLM, TAKE1), d(S_MS, TAKE1)]),
    ("deny", &[d(H_MSLM, TAKE1), d(S_MS, TAKE1)]),
    ("auth_basic", &[d(H_MSLM, TAKE1)]),
    ("auth_basic_user_file", &[d(H_MSLM, TAKE1)]),
    ("auth_request", &[d(H_MSL, TAKE1)]),
    ("auth_request_set", &[d(H_MSL, TAKE2)]),
    ("valid_referers", &[d(H_SL, MORE1)]),
    ("secure_link", &[d(H_MSL, TAKE1)]),
    ("secure_link_md5", &[d(H_MSL, TAKE1)]),
    ("secure_link_secret", &[d(H_LOC, TAKE1)]),
    // content
    ("autoindex", &[d(H_MSL, FLAG)]),
    ("autoindex_exact_size", &[d(H_MSL, FLAG)]),
    ("autoindex_localtime", &[d(H_MSL, FLAG)]),
    ("autoindex_format", &[d(H_MSL, TAKE1)]),
    ("charset", &[d(H_MSLI, TAKE1)]),
    ("source_charset", &[d(H_MSLI, TAKE1)]),
    ("override_charset", &[d(H_MSLI, FLAG)]),
    ("charset_types", &[d(H_MSL, MORE1)]),
    ("charset_map", &[b(H_MAIN, TAKE2)]),
    ("expires", &[d(H_MSLI, TAKE12)]),
    ("add_header", &[d(H_MSLI, TAKE23)]),
    ("add_trailer", &[d(H_MSLI, TAKE23)]),
    ("add_before_body", &[d(H_MSL, TAKE1)]),
    ("add_after_body", &[d(H_MSL, TAKE1)]),
    ("addition_types", &[d(H_MSL, MORE1)]),
    ("gzip", &[d(H_MSLI, FLAG)]),
    ("gzip_buffers", &[d(H_MSL, TAKE2)]),
    ("gzip_comp_level", &[d(H_MSL, TAKE1)]),
    ("gzip_disable", &[d(H_MSL, MORE1)]),
    ("gzip_http_version", &[d(H_MSL, TAKE1)]),
    ("gzip_min_length", &[d(H_MSL, TAKE1)]),
    ("gzip_proxied", &[d(H_MSL, MORE1)]),
    ("gzip_types", &[d(H_MSL, MORE1)]),
    ("gzip_vary", &[d(H_MSL, FLAG)]),
    ("gzip_static", &[d(H_MSL, TAKE1)]),
    ("gunzip", &[d(H_MSL, FLAG)]),
    ("ssi", &[d(H_MSLI, FLAG)]),
    ("ssi_types", &[d(H_MSL, MORE1)]),
    ("sub_filter", &[d(H_MSL, TAKE2)]),
    ("sub_filter_once", &[d(H_MSL, FLAG)]),
    ("sub_filter_types", &[d(H_MSL, MORE1)]),
    ("sub_filter_last_modified", &[d(H_MSL, FLAG)]),
    ("stub_status", &[d(H_SL, Arity::Range(0, 1))]),
    ("empty_gif", &[d(H_LOC, NOARGS)]),
    ("image_filter", &[d(H_LOC, TAKE123)]),
    ("mp4", &[d(H_LOC, NOARGS)]),
    ("flv", &[d(H_LOC, NOARGS)]),
    ("random_index", &[d(H_LOC, FLAG)]),
    ("dav_methods", &[d(H_MSL, MORE1)]),
    ("create_full_put_path", &[d(H_MSL, FLAG)]),
    ("mirror", &[d(H_MSL, TAKE1)]),
    ("mirror_request_body", &[d(H_MSL, FLAG)]),
    // limits
    ("limit_conn", &[d(H_MSL, TAKE2), d(S_MS, TAKE2)]),
    ("limit_conn_zone", &[d(H_MAIN, TAKE2), d(S_MAIN, TAKE2)]),
    ("limit_conn_status", &[d(H_MSL, TAKE1)]),
    ("limit_conn_log_level", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("limit_req", &[d(H_MSL, TAKE123)]),
    ("limit_req_zone", &[d(H_MAIN, TAKE34)]),
    ("limit_req_status", &[d(H_MSL, TAKE1)]),
    ("limit_req_log_level", &[d(H_MSL, TAKE1)]),
    // variables
    ("map", &[b(H_MAIN, TAKE2), b(S_MAIN, TAKE2)]),
    ("map_hash_max_size", &[d(H_MAIN, TAKE1), d(S_MAIN, TAKE1)]),
    ("map_hash_bucket_size", &[d(H_MAIN, TAKE1), d(S_MAIN, TAKE1)]),
    ("geo", &[b(H_MAIN, TAKE12), b(S_MAIN, TAKE12)]),
    ("split_clients", &[b(H_MAIN, TAKE2), b(S_MAIN, TAKE2)]),
    ("geoip_country", &[d(H_MAIN, TAKE12), d(S_MAIN, TAKE12)]),
    ("geoip_city", &[d(H_MAIN, TAKE12), d(S_MAIN, TAKE12)]),
    ("real_ip_header", &[d(H_MSL, TAKE1)]),
    ("set_real_ip_from", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("real_ip_recursive", &[d(H_MSL, FLAG)]),
    ("userid", &[d(H_MSL, TAKE1)]),
    ("userid_name", &[d(H_MSL, TAKE1)]),
    ("userid_domain", &[d(H_MSL, TAKE1)]),
    ("userid_path", &[d(H_MSL, TAKE1)]),
    ("userid_expires", &[d(H_MSL, TAKE1)]),
    // upstream
    ("least_conn", &[d(H_UPS, NOARGS), d(S_UPS, NOARGS)]),
    ("ip_hash", &[d(H_UPS, NOARGS)]),
    ("hash", &[d(H_UPS, TAKE12), d(S_UPS, TAKE12)]),
    ("random", &[d(H_UPS, Arity::Range(0, 2)), d(S_UPS, Arity::Range(0, 2))]),
    ("zone", &[d(H_UPS, TAKE12), d(S_UPS, TAKE12)]),
    ("keepalive", &[d(H_UPS, TAKE1)]),
    ("match", &[b(H_MAIN, TAKE1), b(S_MAIN, TAKE1)]),
    // proxy
    ("proxy_pass", &[d(H_LIM, TAKE1), d(S_SRV, TAKE1)]),
    ("proxy_set_header", &[d(H_MSL, TAKE2)]),
    ("proxy_set_body", &[d(H_MSL, TAKE1)]),
    ("proxy_method", &[d(H_MSL, TAKE1)]),
    ("proxy_redirect", &[d(H_MSL, TAKE12)]),
    ("proxy_bind", &[d(H_MSL, TAKE12), d(S_MS, TAKE12)]),
    ("proxy_buffering", &[d(H_MSL, FLAG)]),
    ("proxy_request_buffering", &[d(H_MSL, FLAG)]),
    ("proxy_buffers", &[d(H_MSL, TAKE2)]),
    ("proxy_buffer_size", &[d(H_MSL, TAKE1), d(S_MS, TAKE1), d(M_MS, TAKE1)]),
    ("proxy_busy_buffers_size", &[d(H_MSL, TAKE1)]),
    ("proxy_max_temp_file_size", &[d(H_MSL, TAKE1)]),
    ("proxy_temp_file_write_size", &[d(H_MSL, TAKE1)]),
    ("proxy_temp_path", &[d(H_MSL, TAKE1234)]),
    ("proxy_connect_timeout", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_read_timeout", &[d(H_MSL, TAKE1)]),
    ("proxy_send_timeout", &[d(H_MSL, TAKE1)]),
    ("proxy_timeout", &[d(S_MS, TAKE1), d(M_MS, TAKE1)]),
    ("proxy_http_version", &[d(H_MSL, TAKE1)]),
    ("proxy_hide_header", &[d(H_MSL, TAKE1)]),
    ("proxy_pass_header", &[d(H_MSL, TAKE1)]),
    ("proxy_ignore_headers", &[d(H_MSL, MORE1)]),
    ("proxy_pass_request_body", &[d(H_MSL, FLAG)]),
    ("proxy_pass_request_headers", &[d(H_MSL, FLAG)]),
    ("proxy_intercept_errors", &[d(H_MSL, FLAG)]),
    ("proxy_headers_hash_max_size", &[d(H_MSL, TAKE1)]),
    ("proxy_headers_hash_bucket_size", &[d(H_MSL, TAKE1)]),
    ("proxy_next_upstream", &[d(H_MSL, MORE1), d(S_MS, FLAG)]),
    ("proxy_next_upstream_tries", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_next_upstream_timeout", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_cookie_domain", &[d(H_MSL, TAKE12)]),
    ("proxy_cookie_path", &[d(H_MSL, TAKE12)]),
    ("proxy_cache", &[d(H_MSL, TAKE1)]),
    ("proxy_cache_path", &[d(H_MAIN, MORE2)]),
    ("proxy_cache_key", &[d(H_MSL, TAKE1)]),
    ("proxy_cache_valid", &[d(H_MSL, MORE1)]),
    ("proxy_cache_bypass", &[d(H_MSL, MORE1)]),
    ("proxy_no_cache", &[d(H_MSL, MORE1)]),
    ("proxy_cache_use_stale", &[d(H_MSL, MORE1)]),
    ("proxy_cache_methods", &[d(H_MSL, MORE1)]),
    ("proxy_cache_min_uses", &[d(H_MSL, TAKE1)]),
    ("proxy_cache_lock", &[d(H_MSL, FLAG)]),
    ("proxy_cache_lock_timeout", &[d(H_MSL, TAKE1)]),
    ("proxy_cache_revalidate", &[d(H_MSL, FLAG)]),
    ("proxy_cache_background_update", &[d(H_MSL, FLAG)]),
    ("proxy_ssl", &[d(S_MS, FLAG)]),
    ("proxy_ssl_server_name", &[d(H_MSL, FLAG), d(S_MS, FLAG)]),
    ("proxy_ssl_name", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_ssl_verify", &[d(H_MSL, FLAG), d(S_MS, FLAG)]),
    ("proxy_ssl_verify_depth", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_ssl_trusted_certificate", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_ssl_protocols", &[d(H_MSL, MORE1), d(S_MS, MORE1)]),
    ("proxy_ssl_ciphers", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_ssl_certificate", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_ssl_certificate_key", &[d(H_MSL, TAKE1), d(S_MS, TAKE1)]),
    ("proxy_ssl_session_reuse", &[d(H_MSL, FLAG), d(S_MS, FLAG)]),
    ("proxy_protocol", &[d(S_MS, FLAG)]),
    ("proxy_download_rate", &[d(S_MS, TAKE1)]),
    ("proxy_upload_rate", &[d(S_MS, TAKE1)]),
    ("proxy_responses", &[d(S_MS, TAKE1)]),
    // fastcgi, uwsgi, scgi, grpc, memcached
    ("fastcgi_pass", &[d(H_LI, TAKE1)]),
    ("fastcgi_param", &[d(H_MSL, TAKE23)]),
    ("fastcgi_index", &[d(H_MSL, TAKE1)]),
    ("fastcgi_split_path_info", &[d(H_LOC, TAKE1)]),
    ("fastcgi_buffers", &[d(H_MSL, TAKE2)]),
    ("fastcgi_buffer_size", &[d(H_MSL, TAKE1)]),
    ("fastcgi_buffering", &[d(H_MSL, FLAG)]),
    ("fastcgi_connect_timeout", &[d(H_MSL, TAKE1)]),
    ("fastcgi_read_timeout", &[d(H_MSL, TAKE1)]),
    ("fastcgi_send_timeout", &[d(H_MSL, TAKE1)]),
    ("fastcgi_intercept_errors", &[d(H_MSL, FLAG)]),
    ("fastcgi_keep_conn", &[d(H_MSL, FLAG)]),
    ("fastcgi_hide_header", &[d(H_MSL, TAKE1)]),
    ("fastcgi_pass_header", &[d(H_MSL, TAKE1)]),
    ("fastcgi_temp_path", &[d(H_MSL, TAKE1234)]),
    ("fastcgi_cache", &[d(H_MSL, TAKE1)]),
    ("fastcgi_cache_path", &[d(H_MAIN, MORE2)]),
    ("fastcgi_cache_key", &[d(H_MSL, TAKE1)]),
    ("fastcgi_cache_valid", &[d(H_MSL, MORE1)]),
    ("fastcgi_cache_bypass", &[d(H_MSL, MORE1)]),
    ("fastcgi_no_cache", &[d(H_MSL, MORE1)]),
    ("uwsgi_pass", &[d(H_LI, TAKE1)]),
    ("uwsgi_param", &[d(H_MSL, TAKE23)]),
    ("uwsgi_read_timeout", &[d(H_MSL, TAKE1)]),
    ("uwsgi_buffers", &[d(H_MSL, TAKE2)]),
    ("scgi_pass", &[d(H_LI, TAKE1)]),
    ("scgi_param", &[d(H_MSL, TAKE23)]),
    ("grpc_pass", &[d(H_LI, TAKE1)]),
    ("grpc_set_header", &[d(H_MSL, TAKE2)]),
    ("grpc_read_timeout", &[d(H_MSL, TAKE1)]),
    ("grpc_send_timeout", &[d(H_MSL, TAKE1)]),
    ("memcached_pass", &[d(H_LI, TAKE1)]),
    // embedded perl
    ("perl", &[d(H_LOC.union(Contexts::HTTP_LMT), TAKE1)]),
    ("perl_modules", &[d(H_MAIN, TAKE1)]),
    ("perl_require", &[d(H_MAIN, TAKE1)]),
    ("perl_set", &[d(H_MAIN, TAKE2)]),
    // ssl
    ("ssl", &[d(H_MS, FLAG), d(M_MS, FLAG)]),
    ("ssl_certificate", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_certificate_key", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_password_file", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_protocols", &[d(H_MS, MORE1), d(M_MS, MORE1), d(S_MS, MORE1)]),
    ("ssl_ciphers", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_prefer_server_ciphers", &[d(H_MS, FLAG), d(M_MS, FLAG), d(S_MS, FLAG)]),
    ("ssl_session_cache", &[d(H_MS, TAKE12), d(M_MS, TAKE12), d(S_MS, TAKE12)]),
    ("ssl_session_timeout", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_session_tickets", &[d(H_MS, FLAG), d(M_MS, FLAG), d(S_MS, FLAG)]),
    ("ssl_session_ticket_key", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_dhparam", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_ecdh_curve", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_trusted_certificate", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_client_certificate", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_verify_client", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_verify_depth", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_crl", &[d(H_MS, TAKE1), d(M_MS, TAKE1), d(S_MS, TAKE1)]),
    ("ssl_stapling", &[d(H_MS, FLAG)]),
    ("ssl_stapling_verify", &[d(H_MS, FLAG)]),
    ("ssl_stapling_file", &[d(H_MS, TAKE1)]),
    ("ssl_buffer_size", &[d(H_MS, TAKE1)]),
    ("ssl_early_data", &[d(H_MS, FLAG)]),
    ("ssl_handshake_timeout", &[d(S_MS, TAKE1)]),
    ("ssl_preread", &[d(S_MS, FLAG)]),
    // stream
    ("preread_buffer_size", &[d(S_MS, TAKE1)]),
    ("preread_timeout", &[d(S_MS, TAKE1)]),
    // mail
    ("protocol", &[d(M_SRV, TAKE1)]),
    ("auth_http", &[d(M_MS, TAKE1)]),
    ("auth_http_header", &[d(M_MS, TAKE2)]),
    ("auth_http_timeout", &[d(M_MS, TAKE1)]),
    ("proxy_pass_error_message", &[d(M_MS, FLAG)]),
    ("proxy", &[d(M_MS, FLAG)]),
    ("starttls", &[d(M_MS, TAKE1)]),
    ("timeout", &[d(M_MS, TAKE1)]),
    ("xclient", &[d(M_MS, FLAG)]),
    ("smtp_auth", &[d(M_MS, MORE1)]),
    ("smtp_capabilities", &[d(M_MS, MORE1)]),
    ("imap_auth", &[d(M_MS, MORE1)]),
    ("imap_capabilities", &[d(M_MS, MORE1)]),
    ("pop3_auth", &[d(M_MS, MORE1)]),
    ("pop3_capabilities", &[d(M_MS, MORE1)]),
];
