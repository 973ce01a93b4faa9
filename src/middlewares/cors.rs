use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| {
            // 生产环境应收紧为页面构建器发布域名的白名单
            true
        })
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 六种玩法前端都会带自定义 Header，放开以免预检失败
        .allow_any_header()
        .max_age(3600)
}
