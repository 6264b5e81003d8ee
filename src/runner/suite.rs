// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::BoxFuture;

use crate::browser::ui::Ui;
use crate::utils::errors::ScenarioResult;

/// 用例体或前置钩子
pub type CaseFn = for<'a> fn(&'a Ui) -> BoxFuture<'a, ScenarioResult>;

/// 单个用例
#[derive(Clone)]
pub struct Case {
    pub name: &'static str,
    pub body: CaseFn,
}

/// 测试套件
///
/// `setup` 在套件内每个用例之前运行，与用例共享同一个页面
#[derive(Clone)]
pub struct Suite {
    pub name: &'static str,
    pub setup: Option<CaseFn>,
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            setup: None,
            cases: Vec::new(),
        }
    }

    pub fn before_each(mut self, setup: CaseFn) -> Self {
        self.setup = Some(setup);
        self
    }

    pub fn case(mut self, name: &'static str, body: CaseFn) -> Self {
        self.cases.push(Case { name, body });
        self
    }

    /// "套件 / 用例"
    pub fn qualified_name(&self, case: &Case) -> String {
        format!("{} / {}", self.name, case.name)
    }

    /// 按过滤串挑选用例；无过滤时全部选中
    pub fn selected<'a>(&'a self, filter: Option<&'a str>) -> impl Iterator<Item = &'a Case> + 'a {
        self.cases.iter().filter(move |case| match filter {
            Some(f) => self.qualified_name(case).contains(f),
            None => true,
        })
    }
}
