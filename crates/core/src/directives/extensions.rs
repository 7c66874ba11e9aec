//! Third-party module directives missing from the stock baseline.
//!
//! Only add names here; a name already present in the baseline is a test
//! failure.

use super::{Arity, Body, Contexts, Descriptor};

const H_MS: Contexts = Contexts::HTTP_MAIN.union(Contexts::HTTP_SRV);
const H_MSL: Contexts = H_MS.union(Contexts::HTTP_LOC);
const H_MSLI: Contexts = H_MSL.union(Contexts::HTTP_LIF);
const H_LIM: Contexts = Contexts::HTTP_LOC
    .union(Contexts::HTTP_LIF)
    .union(Contexts::HTTP_LMT);
const H_RW: Contexts = Contexts::HTTP_SRV
    .union(Contexts::HTTP_SIF)
    .union(Contexts::HTTP_LOC)
    .union(Contexts::HTTP_LIF);

const fn d(contexts: Contexts, arity: Arity) -> Descriptor {
    Descriptor::new(contexts, arity)
}

const fn b(contexts: Contexts, arity: Arity) -> Descriptor {
    Descriptor::block(contexts, arity)
}

const D: Body = Body::Directives;
const LUA: Body = Body::Opaque;

pub(super) static EXTENSIONS: &[(&str, &[Descriptor], Body)] = &[
    // nginx-opentracing
    ("opentracing", &[d(H_MSL, Arity::Flag)], D),
    ("opentracing_load_tracer", &[d(H_MS, Arity::Take(2))], D),
    ("opentracing_propagate_context", &[d(H_MSL, Arity::NoArgs)], D),
    ("opentracing_tag", &[d(H_MSL, Arity::Take(2))], D),
    ("opentracing_operation_name", &[d(H_MSL, Arity::Take(1))], D),
    ("opentracing_trace_locations", &[d(H_MSL, Arity::Flag)], D),
    // ngx_http_js_module
    (
        "js_import",
        &[
            d(Contexts::HTTP_MAIN, Arity::Take(1)),
            d(Contexts::HTTP_MAIN, Arity::Take(3)),
        ],
        D,
    ),
    ("js_set", &[d(Contexts::HTTP_MAIN, Arity::Range(1, 2))], D),
    ("js_content", &[d(H_LIM, Arity::Take(1))], D),
    // lua-nginx-module
    ("lua_package_path", &[d(Contexts::HTTP_MAIN, Arity::Take(1))], D),
    ("lua_code_cache", &[d(H_MSLI, Arity::Flag)], D),
    ("lua_shared_dict", &[d(Contexts::HTTP_MAIN, Arity::Take(2))], D),
    ("rewrite_by_lua_file", &[d(H_MSLI, Arity::Take(1))], D),
    ("access_by_lua_file", &[d(H_MSLI, Arity::Take(1))], D),
    ("content_by_lua_file", &[d(H_LIM, Arity::Take(1))], D),
    ("init_by_lua_block", &[b(Contexts::HTTP_MAIN, Arity::NoArgs)], LUA),
    ("init_worker_by_lua_block", &[b(Contexts::HTTP_MAIN, Arity::NoArgs)], LUA),
    ("set_by_lua_block", &[b(H_RW, Arity::Take(1))], LUA),
    ("rewrite_by_lua_block", &[b(H_MSLI, Arity::NoArgs)], LUA),
    ("access_by_lua_block", &[b(H_MSLI, Arity::NoArgs)], LUA),
    ("content_by_lua_block", &[b(H_LIM, Arity::NoArgs)], LUA),
    ("header_filter_by_lua_block", &[b(H_MSLI, Arity::NoArgs)], LUA),
    ("body_filter_by_lua_block", &[b(H_MSLI, Arity::NoArgs)], LUA),
    ("log_by_lua_block", &[b(H_MSLI, Arity::NoArgs)], LUA),
    ("balancer_by_lua_block", &[b(Contexts::HTTP_UPS, Arity::NoArgs)], LUA),
];
