use crate::grammar::{Builder, FirstItem, FollowItem, Grammar, Symbol};

/// Builds the sample grammar:
///
/// ```text
/// S → a A | b B
/// A → c C | d D | ϵ
/// B → c C | d D
/// C → a S
/// D → b B
/// ```
///
/// The FIRST and FOLLOW sets and the full LL(1) parsing table are supplied
/// alongside the productions. Every non-terminal ends up with only the end
/// marker in its FOLLOW set, which is why A → ϵ is chosen exactly at the end
/// of the input.
pub fn grammar() -> Grammar {
    let mut b = Builder::new();

    let s = b.non_terminal("S");
    let nt_a = b.non_terminal("A");
    let nt_b = b.non_terminal("B");
    let nt_c = b.non_terminal("C");
    let nt_d = b.non_terminal("D");

    let a = b.terminal('a');
    let t_b = b.terminal('b');
    let c = b.terminal('c');
    let d = b.terminal('d');

    let s_a = b.production(s, vec![Symbol::Terminal(a), Symbol::NonTerminal(nt_a)]);
    let s_b = b.production(s, vec![Symbol::Terminal(t_b), Symbol::NonTerminal(nt_b)]);
    let a_c = b.production(nt_a, vec![Symbol::Terminal(c), Symbol::NonTerminal(nt_c)]);
    let a_d = b.production(nt_a, vec![Symbol::Terminal(d), Symbol::NonTerminal(nt_d)]);
    let a_e = b.production(nt_a, vec![Symbol::Empty]);
    let b_c = b.production(nt_b, vec![Symbol::Terminal(c), Symbol::NonTerminal(nt_c)]);
    let b_d = b.production(nt_b, vec![Symbol::Terminal(d), Symbol::NonTerminal(nt_d)]);
    let c_a = b.production(nt_c, vec![Symbol::Terminal(a), Symbol::NonTerminal(s)]);
    let d_b = b.production(nt_d, vec![Symbol::Terminal(t_b), Symbol::NonTerminal(nt_b)]);

    b.entry(s, FollowItem::Character('a'), s_a);
    b.entry(s, FollowItem::Character('b'), s_b);
    b.entry(nt_a, FollowItem::Character('c'), a_c);
    b.entry(nt_a, FollowItem::Character('d'), a_d);
    b.entry(nt_a, FollowItem::EndOfInput, a_e);
    b.entry(nt_b, FollowItem::Character('c'), b_c);
    b.entry(nt_b, FollowItem::Character('d'), b_d);
    b.entry(nt_c, FollowItem::Character('a'), c_a);
    b.entry(nt_d, FollowItem::Character('b'), d_b);

    b.first(s, vec![FirstItem::Character('a'), FirstItem::Character('b')]);
    b.first(
        nt_a,
        vec![
            FirstItem::Character('c'),
            FirstItem::Character('d'),
            FirstItem::Empty,
        ],
    );
    b.first(nt_b, vec![FirstItem::Character('c'), FirstItem::Character('d')]);
    b.first(nt_c, vec![FirstItem::Character('a')]);
    b.first(nt_d, vec![FirstItem::Character('b')]);

    for nt in [s, nt_a, nt_b, nt_c, nt_d] {
        b.follow(nt, vec![FollowItem::EndOfInput]);
    }

    b.start(s);

    b.build().expect("sample grammar is well-formed")
}
